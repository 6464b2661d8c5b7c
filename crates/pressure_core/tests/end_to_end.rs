//! NSH vs ATL: metadata + three tracking frames through to the CSV report.

use pressure_core::{
    process_stream, process_stream_parallel, MatchContext, MatchMetadata, PressureConfig,
    ReportWriter, TrackingReader,
};
use std::fs;
use std::io::Write;

const METADATA: &str = r#"{
    "description": "NSH - ATL : 2020-09-12",
    "homePlayers": [
        {"optaId": "101", "name": "Hany Mukhtar", "number": 10},
        {"optaId": "102", "name": "Walker Zimmerman", "number": 25}
    ],
    "awayPlayers": [
        {"optaId": "201", "name": "Jeff Larentowicz", "number": 5},
        {"optaId": "202", "name": "Ezequiel Barco", "number": 8}
    ]
}"#;

const TRACKING: &str = r#"{"frameIdx":1,"wallClock":1599951600000,"period":1,"gameClock":0.0,"live":false,"lastTouch":"home","ball":{"xyz":[0.0,0.0,0.0]},"homePlayers":[{"playerId":"101","xyz":[0.5,0.0,0.0]}],"awayPlayers":[{"playerId":"201","xyz":[1.0,0.0,0.0]}]}
{"frameIdx":2,"wallClock":1599951600040,"period":1,"gameClock":0.04,"live":true,"lastTouch":"home","ball":{"xyz":[10.0,10.0,0.0]},"homePlayers":[{"playerId":"101","xyz":[10.5,10.0,0.0]},{"playerId":"102","xyz":[30.0,10.0,0.0]}],"awayPlayers":[{"playerId":"201","xyz":[10.0,13.0,0.0]},{"playerId":"202","xyz":[40.0,10.0,0.0]}]}
{"frameIdx":3,"wallClock":1599951600080,"period":1,"gameClock":0.08,"live":true,"lastTouch":"away","ball":{"xyz":[-20.0,5.0,0.0]},"homePlayers":[{"playerId":"102","xyz":[-20.0,0.0,0.0]}],"awayPlayers":[{"playerId":"202","xyz":[-19.0,5.0,0.0]}]}
"#;

fn write_fixture(dir: &tempfile::TempDir) -> (std::path::PathBuf, std::path::PathBuf) {
    let meta_path = dir.path().join("match_Metadata.json");
    let tracking_path = dir.path().join("match_Data.jsonl");

    fs::write(&meta_path, METADATA).unwrap();
    let mut tracking = fs::File::create(&tracking_path).unwrap();
    tracking.write_all(TRACKING.as_bytes()).unwrap();

    (meta_path, tracking_path)
}

#[test]
fn nsh_atl_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let (meta_path, tracking_path) = write_fixture(&dir);

    let metadata = MatchMetadata::load(&meta_path).unwrap();
    let ctx = MatchContext::from_metadata(&metadata, &PressureConfig::default()).unwrap();
    let session = process_stream(&ctx, TrackingReader::open(&tracking_path).unwrap()).unwrap();

    assert_eq!(session.total_frames, 3);
    assert_eq!(session.live_frames, 2);
    assert_eq!(session.rows.len(), 1);

    let row = &session.rows[0];
    assert_eq!(row.frame_idx, 2);
    assert_eq!(row.distance_to_ball, 3.0);
    assert_eq!(row.defender.team, "ATL");
    assert_eq!(row.defender.name, "Jeff Larentowicz");
    assert_eq!(row.possessor.as_ref().unwrap().team, "NSH");
    assert_eq!(row.possessor.as_ref().unwrap().name, "Hany Mukhtar");

    let out_path = dir.path().join("pressures.csv");
    let mut report = ReportWriter::create(&out_path).unwrap();
    report.write_rows(&session.rows).unwrap();
    assert_eq!(report.finish().unwrap(), 1);

    let csv = fs::read_to_string(&out_path).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[2],
        "2,1599951600040,1,0.04,NSH,Hany Mukhtar,10,101,ATL,Jeff Larentowicz,5,201,3.0"
    );
}

#[test]
fn nsh_atl_scenario_parallel() {
    let dir = tempfile::tempdir().unwrap();
    let (meta_path, tracking_path) = write_fixture(&dir);

    let metadata = MatchMetadata::load(&meta_path).unwrap();
    let ctx = MatchContext::from_metadata(&metadata, &PressureConfig::default()).unwrap();

    let sequential =
        process_stream(&ctx, TrackingReader::open(&tracking_path).unwrap()).unwrap();
    let parallel =
        process_stream_parallel(&ctx, TrackingReader::open(&tracking_path).unwrap(), 2).unwrap();

    assert_eq!(parallel, sequential);
}

#[test]
fn unknown_player_aborts_run() {
    let dir = tempfile::tempdir().unwrap();
    let (meta_path, _) = write_fixture(&dir);

    let tracking_path = dir.path().join("bad_Data.jsonl");
    fs::write(
        &tracking_path,
        r#"{"frameIdx":1,"wallClock":0,"period":1,"gameClock":0.0,"live":true,"lastTouch":"home","ball":{"xyz":[0.0,0.0,0.0]},"homePlayers":[{"playerId":"101","xyz":[1.0,0.0,0.0]}],"awayPlayers":[{"playerId":"999","xyz":[0.0,1.0,0.0]}]}"#,
    )
    .unwrap();

    let metadata = MatchMetadata::load(&meta_path).unwrap();
    let ctx = MatchContext::from_metadata(&metadata, &PressureConfig::default()).unwrap();
    let err = process_stream(&ctx, TrackingReader::open(&tracking_path).unwrap()).unwrap_err();

    assert!(err.is_data_error());
    assert!(err.to_string().contains("999"));
}

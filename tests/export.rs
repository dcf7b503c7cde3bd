use transit_engine::export::{profile, snapshot};
use transit_engine::flight::{FlightPolicy, TickOutcome, advance, plan_flight};
use transit_engine::orbits::BodyId;
use transit_engine::propulsion::ShipCapability;

fn tug() -> ShipCapability {
    ShipCapability {
        name: "Tug".into(),
        dry_mass_kg: 30_000.0,
        current_mass_kg: 50_000.0,
        thrust_newtons: 90_000.0,
        isp_seconds: 20_000.0,
        max_delta_v_m_s: f64::INFINITY,
    }
}

#[test]
fn profile_csv_has_header_and_one_row_per_tick() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("out").join("profile.csv");

    let pol = FlightPolicy::default();
    let mut state = plan_flight(BodyId(0), BodyId(1), 50_000.0, &tug(), &pol);

    let mut ticks = 0;
    {
        let mut writer = profile::writer_for_path(&path).expect("writer");
        profile::write_header(&mut writer).expect("header");
        loop {
            let outcome = advance(&mut state, pol.tick_seconds);
            ticks += 1;
            profile::Record {
                time_s: state.elapsed_time_s,
                phase: "sample",
                distance_m: state.distance_covered_m,
                velocity_m_s: state.current_velocity_m_s,
            }
            .write_to(writer.as_mut())
            .expect("row");
            if outcome == TickOutcome::Arrived {
                break;
            }
        }
    }

    let contents = std::fs::read_to_string(&path).expect("read back");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[0], "time_s,phase,distance_m,velocity_m_s");
    assert_eq!(lines.len(), ticks + 1);
}

#[test]
fn snapshot_json_round_trips_a_flight() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("flight.json");

    let pol = FlightPolicy::default();
    let mut state = plan_flight(BodyId(0), BodyId(1), 2.0e7, &tug(), &pol);
    advance(&mut state, pol.tick_seconds);

    snapshot::write_json(&path, &state).expect("snapshot");
    let restored: transit_engine::flight::FlightState =
        serde_json::from_reader(std::fs::File::open(&path).expect("open")).expect("parse");
    assert_eq!(state, restored);
}

use lumenator::catalog::default_fixtures;
use lumenator::units::{area_from_dimensions, sq_ft_to_sq_m, sq_m_to_sq_ft};
use lumenator::{
    recommend, resolve, Calculation, CalculationInput, Fixture, FormInput, InputGuard, Lighting,
    LumenError, RoomLuxTable, UnitSystem,
};

#[test]
fn scenario_bedroom_twelve_by_ten_feet() {
    let table = RoomLuxTable::default();
    let r = resolve(12.0, 10.0, UnitSystem::Feet, "Bedroom", None, &table).unwrap();
    assert_eq!(format!("{:.2}", r.area_sq_ft), "120.00");
    assert_eq!(format!("{:.2}", r.area_sq_m), "11.15");
    assert_eq!(r.required_lux, 150.0);
    assert_eq!(r.total_lumens, 1672);
}

#[test]
fn scenario_office_four_by_four_meters() {
    let table = RoomLuxTable::default();
    let r = resolve(4.0, 4.0, UnitSystem::Meters, "Office", None, &table).unwrap();
    assert_eq!(r.area_sq_m, 16.0);
    assert_eq!(format!("{:.2}", r.area_sq_ft), "172.22");
    assert_eq!(r.total_lumens, 6400);
}

#[test]
fn scenario_even_quantity_unchanged() {
    let bulb = Fixture::new(1, "LED Bulb (9W)", 800, 150.0);
    let out = recommend(6400, std::slice::from_ref(&bulb)).unwrap();
    assert_eq!(out[0].quantity, 8);
    assert_eq!(out[0].total_lumens, 6400);
}

#[test]
fn scenario_single_fixture_stays_single() {
    let bulb = Fixture::new(1, "LED Bulb (9W)", 800, 150.0);
    let out = recommend(100, std::slice::from_ref(&bulb)).unwrap();
    assert_eq!(out[0].quantity, 1);
}

#[test]
fn scenario_custom_room_uses_given_lux() {
    // A table without any matching entry proves the table is not consulted.
    let table = RoomLuxTable::new(vec![lumenator::RoomLux::new("Custom", 0)]).unwrap();
    let r = resolve(3.0, 2.0, UnitSystem::Meters, "Custom", Some(500.0), &table).unwrap();
    assert_eq!(r.required_lux, 500.0);
    assert_eq!(r.total_lumens, 3000);
}

#[test]
fn office_full_ranking_with_default_catalog() {
    let out = recommend(6400, &default_fixtures()).unwrap();
    let ranked: Vec<(u32, u64, f64)> = out
        .iter()
        .map(|s| (s.fixture.id, s.quantity, s.total_cost))
        .collect();
    assert_eq!(
        ranked,
        vec![
            (1, 8, 1200.0),
            (2, 4, 1600.0),
            (4, 2, 3000.0),
            (3, 6, 3600.0),
            (6, 16, 4000.0),
            (5, 8, 6000.0),
        ]
    );
}

#[test]
fn properties_hold_over_input_grid() {
    let lighting = Lighting::default();
    let rooms: Vec<String> = lighting
        .rooms
        .room_types()
        .filter(|r| *r != "Custom")
        .map(String::from)
        .collect();

    for unit in [UnitSystem::Feet, UnitSystem::Meters] {
        for length in [0.5, 3.0, 7.25, 12.0, 40.0] {
            for width in [0.75, 4.0, 10.0, 33.3] {
                for room in &rooms {
                    let input = CalculationInput {
                        length,
                        width,
                        unit,
                        room_type: room.clone(),
                        custom_lux: None,
                        entered: None,
                    };
                    let calc = Calculation::run(&input, &lighting).unwrap();
                    let again = Calculation::run(&input, &lighting).unwrap();
                    assert_eq!(calc, again);

                    let r = &calc.result;
                    assert!((sq_m_to_sq_ft(r.area_sq_m) - r.area_sq_ft).abs() <= r.area_sq_ft * 1e-12);

                    for s in &calc.suggestions {
                        assert!(s.quantity * u64::from(s.fixture.lumens) >= r.total_lumens);
                        assert!(s.quantity == 1 || s.quantity % 2 == 0);
                    }
                    for pair in calc.suggestions.windows(2) {
                        assert!(pair[0].total_cost <= pair[1].total_cost);
                    }
                }
            }
        }
    }
}

#[test]
fn area_round_trip() {
    for area in [0.001, 0.5, 1.0, 99.99, 120.0, 2_500.0, 123_456.789] {
        let (ft, m) = area_from_dimensions(area, 1.0, UnitSystem::Feet);
        assert_eq!(ft, area);
        assert!((sq_m_to_sq_ft(m) - area).abs() <= area * 1e-12);
        assert!((sq_ft_to_sq_m(sq_m_to_sq_ft(area)) - area).abs() <= area * 1e-12);
    }
}

#[test]
fn form_to_report_flow() {
    let lighting = Lighting::default();
    let form = FormInput {
        room_type: "Kitchen".into(),
        length: "10".into(),
        width: "8".into(),
        custom_lux: String::new(),
        unit: UnitSystem::Feet,
    };
    let input = InputGuard::validate(&form, &lighting.rooms).unwrap();
    let mut session = lumenator::Session::new(&lighting);
    let calc = session.calculate(&input).unwrap();
    // 80 sq ft = 7.43224 sq m, x 300 lux = 2229.672
    assert_eq!(calc.result.total_lumens, 2230);

    let at = chrono::NaiveDate::from_ymd_opt(2026, 3, 1)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .unwrap();
    let text = session.report(at).unwrap();
    assert!(text.starts_with("Lumenator Lighting Calculation Report\n"));
    assert!(text.contains("- Dimensions: 10 ft x 8 ft\n"));
    assert!(text.contains("- Area: 80.00 sq ft (7.43 sq m)\n"));
    assert!(text.contains("- Total Required Lumens: 2230 lumens\n"));
    assert!(text.contains("(Best Value)"));
    assert!(text.ends_with("Report generated on: 2026-03-01 09:00:00"));
}

#[test]
fn oversized_room_is_an_error_not_a_panic() {
    let lighting = Lighting::default();
    let form = FormInput {
        room_type: "Office".into(),
        length: "1e10".into(),
        width: "1e10".into(),
        custom_lux: String::new(),
        unit: UnitSystem::Feet,
    };
    let input = InputGuard::validate(&form, &lighting.rooms).unwrap();
    let err = Calculation::run(&input, &lighting).unwrap_err();
    assert!(matches!(err, LumenError::RequirementOutOfRange(_)));
}

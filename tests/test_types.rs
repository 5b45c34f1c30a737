use panel_tilt::error::PanelTiltError;
use panel_tilt::locations::*;
use panel_tilt::types::*;

// ── MountingPositions ──

#[test]
fn test_default_positions() {
    let p = MountingPositions::default();
    assert_eq!(p.as_slice(), &[27.0, 35.0, 42.0]);
    assert_eq!(p.len(), 3);
    assert_eq!(p.lowest(), 27.0);
    assert_eq!(p.highest(), 42.0);
    assert_eq!(p.get(1), Some(35.0));
    assert_eq!(p.get(3), None);
}

#[test]
fn test_positions_keep_declared_order() {
    let p = MountingPositions::new(vec![42.0, 27.0, 35.0]).unwrap();
    assert_eq!(p.as_slice(), &[42.0, 27.0, 35.0]);
    assert_eq!(p.lowest(), 27.0);
    assert_eq!(p.highest(), 42.0);
}

#[test]
fn test_positions_rejected() {
    assert_eq!(MountingPositions::new(vec![]), Err(PanelTiltError::NoPositions));
    assert_eq!(
        MountingPositions::new(vec![30.0, 95.0]),
        Err(PanelTiltError::InvalidPosition { value: 95.0 })
    );
    assert_eq!(
        MountingPositions::new(vec![-1.0]),
        Err(PanelTiltError::InvalidPosition { value: -1.0 })
    );
    assert!(MountingPositions::new(vec![f64::NAN]).is_err());
    assert!(MountingPositions::try_from(vec![0.0, 90.0]).is_ok());
}

// ── SeasonTag ──

#[test]
fn test_season_tags() {
    let p = MountingPositions::default();
    assert_eq!(SeasonTag::for_position(27.0, &p), SeasonTag::SummerOptimization);
    assert_eq!(SeasonTag::for_position(35.0, &p), SeasonTag::Transitional);
    assert_eq!(SeasonTag::for_position(42.0, &p), SeasonTag::WinterOptimization);
    assert_eq!(SeasonTag::WinterOptimization.to_string(), "winter optimization");
}

#[test]
fn test_season_tag_single_position_is_summer() {
    let p = MountingPositions::new(vec![30.0]).unwrap();
    assert_eq!(SeasonTag::for_position(30.0, &p), SeasonTag::SummerOptimization);
}

#[test]
fn test_season_tag_with_many_positions() {
    let p = MountingPositions::new(vec![15.0, 25.0, 35.0, 45.0, 55.0]).unwrap();
    assert_eq!(SeasonTag::for_position(15.0, &p), SeasonTag::SummerOptimization);
    assert_eq!(SeasonTag::for_position(25.0, &p), SeasonTag::Transitional);
    assert_eq!(SeasonTag::for_position(45.0, &p), SeasonTag::Transitional);
    assert_eq!(SeasonTag::for_position(55.0, &p), SeasonTag::WinterOptimization);
}

#[test]
fn test_segment_helpers() {
    let s = CalendarSegment {
        start_day: 108,
        end_day: 131,
        position: 35.0,
        position_index: 1,
    };
    assert_eq!(s.len_days(), 24);
    assert!(s.contains(108) && s.contains(131));
    assert!(!s.contains(107) && !s.contains(132));
}

// ── Locations ──

#[test]
fn test_city_table() {
    assert_eq!(FRENCH_CITIES.len(), 20);
    let paris = find_city("Paris").unwrap();
    assert_eq!(paris.latitude, 48.8566);
    assert_eq!(paris.longitude, 2.3522);
}

#[test]
fn test_city_lookup_is_case_insensitive() {
    assert_eq!(find_city("saint-étienne").unwrap().name, "Saint-Étienne");
    assert_eq!(find_city("  LE HAVRE ").unwrap().name, "Le Havre");
    assert!(find_city("Atlantis").is_none());
}

#[test]
fn test_location_city() {
    let loc = Location::city("Lyon").unwrap();
    assert_eq!(loc.latitude(), 45.7640);
    assert_eq!(loc.longitude(), 4.8357);
    assert_eq!(loc.label(), "Lyon");
    assert_eq!(
        Location::city("Atlantis"),
        Err(PanelTiltError::UnknownLocation("Atlantis".to_string()))
    );
}

#[test]
fn test_location_coordinates() {
    let loc = Location::from_coordinates(48.8566, 2.3522).unwrap();
    assert_eq!(loc.label(), "48.8566°N, 2.3522°E");
    let south = Location::from_coordinates(-33.9, -18.42).unwrap();
    assert_eq!(south.label(), "33.9000°S, 18.4200°W");
    assert_eq!(south.latitude(), -33.9);
}

#[test]
fn test_location_coordinates_rejected() {
    assert_eq!(
        Location::from_coordinates(91.0, 0.0),
        Err(PanelTiltError::InvalidLatitude { value: 91.0 })
    );
    assert_eq!(
        Location::from_coordinates(45.0, -180.5),
        Err(PanelTiltError::InvalidLongitude { value: -180.5 })
    );
    assert!(Location::from_coordinates(f64::NAN, 0.0).is_err());
    assert!(Location::from_coordinates(-90.0, 180.0).is_ok());
}

#[test]
fn test_error_messages() {
    assert_eq!(
        PanelTiltError::InvalidLatitude { value: 91.0 }.to_string(),
        "invalid latitude 91° (must be between -90° and +90°)"
    );
    assert_eq!(
        PanelTiltError::UnknownLocation("Atlantis".into()).to_string(),
        "unknown location: Atlantis"
    );
}

#[cfg(feature = "serde")]
mod serde_support {
    use panel_tilt::calendar::build_yearly_calendar;
    use panel_tilt::types::MountingPositions;

    #[test]
    fn test_positions_deserialize_validated() {
        let p: MountingPositions = serde_json::from_str("[20, 30.5]").unwrap();
        assert_eq!(p.as_slice(), &[20.0, 30.5]);
        assert!(serde_json::from_str::<MountingPositions>("[]").is_err());
        assert!(serde_json::from_str::<MountingPositions>("[120]").is_err());
    }

    #[test]
    fn test_calendar_serializes() {
        let cal = build_yearly_calendar(48.8566, 2026, &MountingPositions::default());
        let value = serde_json::to_value(&cal).unwrap();
        assert_eq!(value["year"], 2026);
        assert_eq!(value["segments"][0]["start_day"], 1);
        assert_eq!(value["segments"][0]["end_day"], 107);
        assert_eq!(value["segments"][0]["position"], 42.0);
    }
}

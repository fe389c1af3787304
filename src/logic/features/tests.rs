//! Integration Tests for the feature schema
//!
//! Reading → vector → layout checks working together.

#[cfg(test)]
mod integration_tests {
    use crate::logic::features::{
        layout::{first_name_mismatch, layout_hash},
        EnvironmentalReading, FeatureError, FeatureVector, FEATURE_LAYOUT, INPUT_BOUNDS,
    };
    use proptest::prelude::*;

    /// Every named field lands at its layout index
    #[test]
    fn test_reading_fields_follow_layout() {
        let reading = EnvironmentalReading {
            rainfall_mm: 210.0,
            humidity_pct: 35.0,
            temperature_c: 28.5,
            wind_speed_kmph: 60.0,
            soil_moisture_pct: 80.0,
            magnitude: 2.1,
            depth_km: 15.0,
        };
        let vector = FeatureVector::from_reading(&reading).unwrap();

        assert_eq!(vector.as_array(), &[210.0, 35.0, 28.5, 60.0, 80.0, 2.1, 15.0]);
    }

    #[test]
    fn test_layout_names_are_log_columns() {
        // The log header repeats the layout after the four leading columns
        let header = crate::logic::prediction_log::LOG_HEADER;
        assert_eq!(&header[4..], FEATURE_LAYOUT);
        assert_eq!(first_name_mismatch(&header[4..]), None);
    }

    #[test]
    fn test_from_slice_matches_from_reading() {
        let reading = EnvironmentalReading {
            rainfall_mm: 12.0,
            temperature_c: 31.0,
            ..EnvironmentalReading::default()
        };
        let a = FeatureVector::from_reading(&reading).unwrap();
        let b = FeatureVector::from_slice(&reading.to_array()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.layout_hash(), layout_hash());
    }

    #[test]
    fn test_stale_vector_is_rejected_by_validate() {
        let vector = FeatureVector::from_reading(&EnvironmentalReading::default())
            .unwrap()
            .restamped(0, 0xDEAD_BEEF);
        let err: FeatureError = vector.validate().unwrap_err().into();
        assert!(matches!(err, FeatureError::LayoutMismatch(_)));
    }

    #[test]
    fn test_bounds_cover_every_feature() {
        for (name, (min, max)) in FEATURE_LAYOUT.iter().zip(INPUT_BOUNDS) {
            assert!(min < max, "{name} has an empty range");
        }
    }

    fn in_bounds_reading() -> impl Strategy<Value = EnvironmentalReading> {
        (
            0.0f64..=500.0,
            0.0f64..=100.0,
            -10.0f64..=60.0,
            0.0f64..=150.0,
            0.0f64..=100.0,
            0.0f64..=10.0,
            0.0f64..=100.0,
        )
            .prop_map(|(r, h, t, w, s, m, d)| {
                EnvironmentalReading::from_array([r, h, t, w, s, m, d])
            })
    }

    proptest! {
        /// Anything the collector accepts is a valid feature vector
        #[test]
        fn prop_in_bounds_readings_build(reading in in_bounds_reading()) {
            prop_assert!(reading.check_input_bounds().is_ok());
            let vector = FeatureVector::from_reading(&reading);
            prop_assert!(vector.is_ok());
            let vector = vector.unwrap();
            prop_assert_eq!(vector.as_array(), &reading.to_array());
        }
    }
}

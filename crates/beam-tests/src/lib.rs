//! Integration tests for beam-rs crates.
//!
//! End-to-end scenarios that cross crate boundaries: geometry feeding
//! the photometric model, profiles feeding settings, suggestions fed
//! back into the model.

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use beam_core::{units, AspectRatio, ScreenGeometry};
    use beam_photometry::{
        apply_alr_rejection, apply_lumen_reduction, compute, compute_nit_levels, suggest,
        NitLevelInputs, PhotometricInputs,
    };
    use beam_profiles::{ProfileDatabase, Settings};
    use beam_viewing::{minimum_screen_for, recommend, ContentDetailClass};

    /// The reference installation used across the test suite: a 135in
    /// ultrawide screen, 3000 lm projector, 110 lux living room.
    fn reference_screen() -> ScreenGeometry {
        ScreenGeometry::resolve(135.0, &AspectRatio::ULTRAWIDE).unwrap()
    }

    #[test]
    fn test_geometry_to_photometry_pipeline() {
        let screen = reference_screen();
        let screen_m = screen.rescale(units::METERS_PER_INCH);
        assert_relative_eq!(screen_m.area, 4.2572, max_relative = 1e-4);

        let result = compute(&PhotometricInputs {
            projector_lumens: 3000.0,
            screen_gain: 1.0,
            color_factor: 1.0,
            ambient_lux: 110.0,
            alr_ambient: 0.7,
            alr_projector: 1.0,
            screen_area: screen_m.area,
        })
        .unwrap();

        assert_relative_eq!(result.effective_ambient_lux, 77.0, max_relative = 1e-12);
        let contrast = result.system_contrast_ratio.as_f64().unwrap();
        assert!(contrast > 10.0 && contrast < 10.3, "contrast {contrast}");
    }

    #[test]
    fn test_both_contrast_models_run_independently() {
        // The illuminance quotient and the nit-level quotient answer
        // different questions; neither output constrains the other
        let screen_m = reference_screen().rescale(units::METERS_PER_INCH);

        let illuminance = compute(&PhotometricInputs {
            projector_lumens: 3000.0,
            screen_gain: 1.0,
            color_factor: 1.0,
            ambient_lux: 110.0,
            alr_ambient: 0.7,
            alr_projector: 1.0,
            screen_area: screen_m.area,
        })
        .unwrap();

        let nits = compute_nit_levels(&NitLevelInputs {
            effective_lumens: 3000.0,
            effective_ambient_lux: apply_alr_rejection(110.0, 30.0).unwrap(),
            screen_gain: 1.0,
            color_factor: 1.0,
            screen_area: screen_m.area,
        })
        .unwrap();

        assert!(illuminance.system_contrast_ratio.as_f64().unwrap() > 1.0);
        assert!(nits.black_level > 0);
        assert!(nits.white_level > nits.black_level);
        assert!(nits.contrast_ratio > 1.0);
    }

    #[test]
    fn test_viewing_distances_track_geometry() {
        let screen = reference_screen();
        let full = recommend(&screen, ContentDetailClass::General);

        // A 60% PiP region scales every height-based distance by sqrt(0.6)
        let pip = screen.scale(0.6).unwrap();
        let reduced = recommend(&pip, ContentDetailClass::General);
        let k = 0.6_f64.sqrt();
        assert_relative_eq!(
            reduced[0].min.unwrap(),
            full[0].min.unwrap() * k,
            max_relative = 1e-12
        );
        assert_relative_eq!(reduced[1].max, full[1].max * k, max_relative = 1e-12);
        assert_relative_eq!(reduced[3].max, full[3].max * k, max_relative = 1e-12);
    }

    #[test]
    fn test_sizing_inverts_recommendation() {
        // A screen sized for a distance, viewed from that distance,
        // sits exactly at the sizing multiplier
        let min = minimum_screen_for(20.0, &AspectRatio::HDTV, ContentDetailClass::General)
            .unwrap();
        assert_relative_eq!(
            units::feet_to_inches(20.0) / min.height,
            8.0,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_suggestion_feedback() {
        let screen_m = reference_screen().rescale(units::METERS_PER_INCH);
        let inputs = PhotometricInputs {
            projector_lumens: 3000.0,
            screen_gain: 1.0,
            color_factor: 1.0,
            ambient_lux: 110.0,
            alr_ambient: 0.7,
            alr_projector: 1.0,
            screen_area: screen_m.area,
        };
        let result = compute(&inputs).unwrap();
        let levers = suggest(30.0, &result, 0.7).unwrap();

        // Dimming the room to the suggested ceiling hits the target
        // projector-to-ambient quotient
        let dimmed = compute(&PhotometricInputs {
            ambient_lux: levers.max_ambient_lux,
            ..inputs
        })
        .unwrap();
        assert_relative_eq!(
            dimmed.brightness_lux / dimmed.effective_ambient_lux,
            30.0,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_profiles_through_the_model() {
        // Database record -> settings -> photometric inputs, as the CLI
        // wires them
        let db = ProfileDatabase::builtin();
        let mut settings = Settings {
            diagonal_inches: 135.0,
            aspect_ratio: "21:9".into(),
            ambient_lux: 110.0,
            ..Settings::default()
        };
        settings.apply_screen(db.screen("ALR Gray").unwrap());
        settings.apply_projector(db.projector("Generic Lamp").unwrap());

        let ratio = settings.aspect().unwrap();
        let screen_m = ScreenGeometry::resolve(settings.diagonal_inches, &ratio)
            .unwrap()
            .rescale(units::METERS_PER_INCH);

        let lumens =
            apply_lumen_reduction(settings.lumens, settings.lumen_reduction_percentage).unwrap();
        assert_relative_eq!(lumens, 2250.0, max_relative = 1e-12);

        let result = compute(&PhotometricInputs {
            projector_lumens: lumens,
            screen_gain: settings.screen_gain,
            color_factor: settings.color_factor,
            ambient_lux: settings.ambient_lux,
            alr_ambient: 1.0 - settings.alr_percentage / 100.0,
            alr_projector: 1.0,
            screen_area: screen_m.area,
        })
        .unwrap();

        // ALR Gray rejects 70%, so only 33 lux compete with the image
        assert_relative_eq!(result.effective_ambient_lux, 33.0, max_relative = 1e-9);
        assert!(result.system_contrast_ratio.as_f64().unwrap() > 10.0);
    }

    #[test]
    fn test_settings_roundtrip_preserves_pipeline_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.yaml");

        let settings = Settings {
            diagonal_inches: 120.0,
            aspect_ratio: "16:9".into(),
            ambient_lux: 80.0,
            lumens: 2600.0,
            ..Settings::default()
        };
        settings.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();

        let a = ScreenGeometry::resolve(
            settings.diagonal_inches,
            &settings.aspect().unwrap(),
        )
        .unwrap();
        let b = ScreenGeometry::resolve(loaded.diagonal_inches, &loaded.aspect().unwrap())
            .unwrap();
        assert_eq!(a, b);
    }
}

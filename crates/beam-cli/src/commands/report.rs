//! Full installation report.
//!
//! Runs the whole pipeline: geometry, photometric model, viewing
//! distances, optional PiP region and improvement suggestions. Inputs
//! come from flags, falling back to named profiles and the settings
//! file.

use std::path::Path;

use anyhow::Result;

use beam_core::{units, ScreenGeometry};
use beam_photometry::{
    apply_lumen_reduction, compute, half_gain_width, suggest, PhotometricInputs,
    PhotometricResult, SuggestionResult,
};
use beam_viewing::{recommend, ContentDetailClass, DistanceRange};

use crate::ReportArgs;

pub fn run(args: ReportArgs, settings_path: &Path) -> Result<()> {
    let mut settings = super::load_settings(settings_path)?;
    let db = super::load_database(args.db.as_deref())?;
    super::apply_profiles(
        &mut settings,
        &db,
        args.screen.as_deref(),
        args.projector.as_deref(),
    );

    // Explicit flags override profiles and settings
    if let Some(d) = args.diagonal {
        settings.diagonal_inches = d;
    }
    if let Some(r) = &args.ratio {
        settings.aspect_ratio = r.clone();
    }
    if let Some(l) = args.lumens {
        settings.lumens = l;
    }
    if let Some(g) = args.gain {
        settings.screen_gain = g;
    }
    if let Some(a) = args.ambient {
        settings.ambient_lux = a;
    }
    if let Some(f) = args.alr_ambient {
        // Settings store rejection percent; the flag is the remaining fraction
        settings.alr_percentage = (1.0 - f) * 100.0;
    }

    let ratio = settings.aspect()?;
    let screen = ScreenGeometry::resolve(settings.diagonal_inches, &ratio)?;
    let screen_m = screen.rescale(units::METERS_PER_INCH);
    tracing::debug!(
        diagonal = settings.diagonal_inches,
        ratio = %ratio,
        area_m2 = screen_m.area,
        "resolved screen geometry"
    );

    let lumens = apply_lumen_reduction(settings.lumens, settings.lumen_reduction_percentage)?;
    let inputs = PhotometricInputs {
        projector_lumens: lumens,
        screen_gain: settings.screen_gain,
        color_factor: settings.color_factor,
        ambient_lux: settings.ambient_lux,
        alr_ambient: 1.0 - settings.alr_percentage / 100.0,
        alr_projector: args.alr_projector,
        screen_area: screen_m.area,
    };
    let photo = compute(&inputs)?;

    let distances = recommend(&screen, ContentDetailClass::General);
    let half_gain = args
        .half_gain_angle
        .map(|angle| half_gain_width(screen_m.width, angle))
        .transpose()?;
    let pip = args.area_factor.map(|f| screen.scale(f)).transpose()?;
    let levers = args
        .target
        .map(|t| suggest(t, &photo, inputs.alr_ambient))
        .transpose()?;

    if args.json {
        print_json(&screen, &screen_m, &photo, &distances, args.target, &levers);
    } else {
        print_text(
            &screen, &screen_m, &photo, &distances, half_gain, &pip, args.target, &levers,
        );
    }

    if args.save {
        settings.save(settings_path)?;
        tracing::debug!(path = %settings_path.display(), "settings saved");
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn print_text(
    screen: &ScreenGeometry,
    screen_m: &ScreenGeometry,
    photo: &PhotometricResult,
    distances: &[DistanceRange],
    half_gain: Option<f64>,
    pip: &Option<ScreenGeometry>,
    target: Option<f64>,
    levers: &Option<SuggestionResult>,
) {
    println!("Screen and projector properties:");
    println!(
        "  Width:      {:.2} in ({:.3} m)",
        screen.width, screen_m.width
    );
    println!(
        "  Height:     {:.2} in ({:.3} m)",
        screen.height, screen_m.height
    );
    println!("  Diagonal:   {:.2} in", screen.diagonal);
    println!("  Area:       {:.2} m\u{b2}", screen_m.area);
    println!(
        "  Effective projector lumens: {:.1}",
        photo.effective_projector_lumens
    );

    println!();
    println!("Projected light:");
    println!("  Screen brightness:  {:.1} lux", photo.brightness_lux);
    println!("  Effective ambient:  {:.1} lux", photo.effective_ambient_lux);
    println!(
        "  Total brightness:   {:.1} lux",
        photo.total_effective_brightness
    );
    println!("  System contrast:    {}", photo.system_contrast_ratio);
    if let Some(span) = half_gain {
        println!("  Half-gain span:     {:.2} m", span);
    }

    println!();
    println!("Viewing distances:");
    for range in distances {
        match range.min {
            Some(min) => println!(
                "  {:<16} {:.1} - {:.1} in ({} - {})",
                format!("{}:", range.standard),
                min,
                range.max,
                super::format_feet_inches(min),
                super::format_feet_inches(range.max),
            ),
            None => println!(
                "  {:<16} {:.1} in ({})",
                format!("{}:", range.standard),
                range.max,
                super::format_feet_inches(range.max),
            ),
        }
    }

    if let Some(pip) = pip {
        println!();
        println!("Picture-in-picture region:");
        println!("  Width:      {:.2} in", pip.width);
        println!("  Height:     {:.2} in", pip.height);
        println!("  Diagonal:   {:.2} in", pip.diagonal);
    }

    if let (Some(target), Some(levers)) = (target, levers) {
        println!();
        println!("Improvements for a {target:.1}:1 target:");
        println!("  Max ambient light:         {:.1} lux", levers.max_ambient_lux);
        println!(
            "  Required projector output: {:.1} lm",
            levers.required_projector_lumens
        );
        println!(
            "  Required ALR (remaining):  {:.3}",
            levers.required_alr_ambient
        );
    }
}

fn print_json(
    screen: &ScreenGeometry,
    screen_m: &ScreenGeometry,
    photo: &PhotometricResult,
    distances: &[DistanceRange],
    target: Option<f64>,
    levers: &Option<SuggestionResult>,
) {
    println!("{{");
    println!("  \"width_in\": {:.4},", screen.width);
    println!("  \"height_in\": {:.4},", screen.height);
    println!("  \"diagonal_in\": {:.4},", screen.diagonal);
    println!("  \"area_m2\": {:.4},", screen_m.area);
    println!(
        "  \"effective_projector_lumens\": {:.4},",
        photo.effective_projector_lumens
    );
    println!("  \"brightness_lux\": {:.4},", photo.brightness_lux);
    println!(
        "  \"effective_ambient_lux\": {:.4},",
        photo.effective_ambient_lux
    );
    println!(
        "  \"total_effective_brightness\": {:.4},",
        photo.total_effective_brightness
    );
    match photo.system_contrast_ratio.as_f64() {
        Some(v) => println!("  \"system_contrast\": {v:.4},"),
        None => println!("  \"system_contrast\": null,"),
    }
    println!("  \"viewing_distances_in\": {{");
    for (i, range) in distances.iter().enumerate() {
        let comma = if i + 1 < distances.len() { "," } else { "" };
        match range.min {
            Some(min) => println!(
                "    \"{}\": [{:.2}, {:.2}]{comma}",
                range.standard, min, range.max
            ),
            None => println!("    \"{}\": [null, {:.2}]{comma}", range.standard, range.max),
        }
    }
    if let (Some(target), Some(levers)) = (target, levers) {
        println!("  }},");
        println!("  \"suggestions\": {{");
        println!("    \"target_contrast\": {target:.2},");
        println!("    \"max_ambient_lux\": {:.4},", levers.max_ambient_lux);
        println!(
            "    \"required_projector_lumens\": {:.4},",
            levers.required_projector_lumens
        );
        println!(
            "    \"required_alr_ambient\": {:.6}",
            levers.required_alr_ambient
        );
        println!("  }}");
    } else {
        println!("  }}");
    }
    println!("}}");
}

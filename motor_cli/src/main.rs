//! # Motor Design CLI
//!
//! Terminal front-end for the motor design engine. Prompts for the core
//! winding data, runs the full staged pipeline and prints results with any
//! engineering alerts.

use std::io::{self, BufRead, Write};

use motor_core::calculations::design::{calculate, CoreGeometry, DesignInput};
use motor_core::Severity;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn severity_tag(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "[info]",
        Severity::Warning => "[warn]",
        Severity::Critical => "[CRIT]",
    }
}

fn main() {
    println!("Motor Design Calculator");
    println!("=======================");
    println!();

    let power_hp = prompt_f64("Rated power (HP) [10.0]: ", 10.0);
    let voltage_star = prompt_f64("Star line voltage (V) [220.0]: ", 220.0);
    let current_star = prompt_f64("Star line current (A) [26.0]: ", 26.0);
    let frequency = prompt_f64("Frequency (Hz) [60.0]: ", 60.0);
    let poles = prompt_u32("Poles [4]: ", 4);
    let number_of_slots = prompt_u32("Stator slots [36]: ", 36);
    let stack_length = prompt_f64("Stack length (m) [0.12]: ", 0.12);
    let internal_diameter = prompt_f64("Internal diameter (m) [0.08]: ", 0.08);

    let input = DesignInput {
        model: "CLI-Demo".to_string(),
        power_hp,
        power_factor: 0.85,
        rpm: 120.0 * frequency / f64::from(poles.max(1)),
        poles,
        efficiency: 0.9,
        frequency,
        voltage_delta: voltage_star * 3.0_f64.sqrt(),
        voltage_star,
        current_delta: current_star / 3.0_f64.sqrt(),
        current_star,
        core: CoreGeometry {
            slot_depth: 0.02,
            crown_height: 0.015,
            stator_tooth_width: 0.008,
            number_of_slots,
            stack_length,
            internal_diameter,
        },
    };

    println!();
    match calculate(&input) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  MOTOR DESIGN RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Magnetics:");
            println!("  Flux per pole:   {:.6} Wb", result.flux_per_pole);
            println!("  Total flux:      {:.6} Wb", result.total_flux);
            println!("  Air gap B:       {:.3} T", result.air_gap_induction);
            println!("  Tooth B:         {:.3} T", result.stator_tooth_induction);
            println!("  Crown B:         {:.3} T", result.stator_crown_induction);
            println!();
            println!("Winding:");
            println!("  Winding factor:  {:.4} (Kp={:.2}, Kd={:.4})",
                result.winding_factor,
                result.pitch_factor,
                result.distribution_factor
            );
            println!("  Turns per phase: {:.0}", result.turns_per_phase);
            println!("  Resistance:      {:.4} Ω/phase", result.resistance_per_phase);
            println!("  Joule losses:    {:.1} W", result.joule_losses);
            println!("  Wire section:    {:.2} mm² ({})", result.wire_section, result.awg_size);
            println!();
            println!("Output quality:");
            println!("  Specific power:  {:.0} W/m³", result.specific_power);
            println!("  THD:             {:.1} %", result.harmonics.total_distortion() * 100.0);
            println!();

            if result.alerts.is_empty() {
                println!("No engineering alerts.");
            } else {
                println!("Alerts:");
                for alert in &result.alerts {
                    println!(
                        "  {} {}: {}",
                        severity_tag(alert.severity),
                        alert.parameter,
                        alert.message
                    );
                }
            }

            println!();
            println!("JSON Output (for API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    }
}

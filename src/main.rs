//! Chemostat Lab - Entry point
//!
//! Interactive continuous-bioreactor simulator.
//!
//! CLI Usage:
//!   cargo run                                # Run interactive simulation
//!   cargo run -- --headless                  # Run a report without a window
//!   cargo run -- --headless -n 10000         # Custom tick count
//!   cargo run -- --config my_params.json     # Alternate parameter file

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use chemostat_lab::{
    config::{ChemostatConfig, DEFAULT_CONFIG_PATH},
    controls::PointerEvent,
    kinetics::{self, CultureStatus},
    render::RenderState,
    simulation::SimulationController,
    state::SimulationMetrics,
};
use glam::Vec2;
use winit::{
    event::{ElementState, Event, KeyEvent, MouseButton, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

/// Smoothing factor for the displayed frame rate
const FPS_SMOOTHING: f32 = 0.1;

/// Command line options
struct CliArgs {
    config_path: PathBuf,
    headless: bool,
    ticks: u64,
}

/// Run a fixed number of ticks without a window and report against the
/// analytic steady state
fn run_headless(config: &ChemostatConfig, ticks: u64) -> Result<()> {
    println!("=== Chemostat Lab - Headless Run ===\n");

    let mut controller = SimulationController::new(config)?;
    controller.start();

    let params = *controller.params();
    println!(
        "μmax = {:.3} 1/h, Ks = {:.2} g/L, Yxs = {:.2}, D = {:.3} 1/h, Sf = {:.1} g/L",
        params.max_growth_rate_per_h(),
        params.half_saturation_g_per_L(),
        params.yield_coefficient(),
        params.dilution_rate_per_h(),
        params.feed_substrate_g_per_L()
    );
    println!("Time step: {} h", controller.dt_h());
    println!("\n--- Running {} ticks ---\n", ticks);

    let start_time = Instant::now();
    for tick in 0..ticks {
        controller.tick();

        // Report progress every 10%
        if ticks >= 10 && tick % (ticks / 10) == 0 {
            let progress = (tick as f64 / ticks as f64) * 100.0;
            let state = controller.state();
            println!(
                "  {:3.0}%: t={:.2} h, X={:.4} g/L, S={:.4} g/L",
                progress,
                controller.time_h(),
                state.biomass_g_per_L,
                state.substrate_g_per_L
            );
        }
    }
    let elapsed = start_time.elapsed();

    let metrics = SimulationMetrics::collect(&controller, 0.0);
    let predicted = metrics.steady_state;

    println!("\n=== Results ===");
    println!("Elapsed time: {:.2?}", elapsed);
    println!("Ticks per second: {:.0}", ticks as f64 / elapsed.as_secs_f64().max(1e-9));
    println!("Simulated time: {:.2} h", metrics.simulation_time_h);
    println!("History samples: {}", metrics.history_len);
    println!();
    println!(
        "Final:     X = {:.4} g/L, S = {:.4} g/L",
        metrics.biomass_g_per_L, metrics.substrate_g_per_L
    );
    println!(
        "Predicted: X* = {:.4} g/L, S* = {:.4} g/L",
        predicted.biomass_g_per_L, predicted.substrate_g_per_L
    );
    println!("μ(S) = {:.4} 1/h, washout D = {:.4} 1/h", metrics.growth_rate_per_h, metrics.washout_rate_per_h);

    println!("\n=== Diagnostic Checks ===");
    if predicted.washout {
        println!("⚠️  D exceeds the washout rate: the culture cannot persist");
    }
    match metrics.status {
        CultureStatus::SteadyState => println!("✓ Culture reached the predicted steady state"),
        CultureStatus::Washout => println!("✓ Culture washed out"),
        CultureStatus::Transient => {
            println!("⚠️  Culture still transient");
            println!("   Try more ticks (e.g. -n 10000)");
        }
    }

    let dt = controller.dt_h();
    let limit = kinetics::washout_dilution_rate(&params);
    if params.dilution_rate_per_h() * dt > 0.5 || limit * dt > 0.5 {
        println!("⚠️  Time step is coarse relative to the rates; Euler may be inaccurate");
    } else {
        println!("✓ Time step small relative to the rates");
    }

    Ok(())
}

/// Parse CLI arguments
fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        headless: false,
        ticks: 2000,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--headless" => cli.headless = true,
            "-n" | "--ticks" => {
                i += 1;
                if i < args.len() {
                    cli.ticks = args[i].parse().unwrap_or(2000);
                }
            }
            "-c" | "--config" => {
                i += 1;
                if i < args.len() {
                    cli.config_path = PathBuf::from(&args[i]);
                }
            }
            "--help" | "-h" => {
                println!("Chemostat Lab");
                println!();
                println!("Usage: chemostat-lab [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --config PATH  Parameter file (default: {})", DEFAULT_CONFIG_PATH);
                println!("  --headless         Run without a window and print a report");
                println!("  -n, --ticks N      Ticks for the headless run (default: 2000)");
                println!("  --help, -h         Show this help");
                std::process::exit(0);
            }
            other => log::warn!("Ignoring unknown argument {:?}", other),
        }
        i += 1;
    }

    cli
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = parse_args();
    let config = ChemostatConfig::load_or_default(&cli.config_path);

    if cli.headless {
        return run_headless(&config, cli.ticks);
    }

    log::info!("Chemostat Lab starting...");

    let mut controller = SimulationController::new(&config)?;
    log::info!(
        "Controller ready: dt = {} h, {} controls",
        controller.dt_h(),
        controller.controls().sliders().len()
    );

    // Create window and event loop
    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Chemostat Lab - Continuous Bioreactor")
            .with_inner_size(winit::dpi::LogicalSize::new(1100, 600))
            .build(&event_loop)?,
    );

    let mut render_state = pollster::block_on(RenderState::new(window.clone()))?;

    // Input state
    let mut cursor = Vec2::ZERO;
    let mut mouse_pressed = false;
    let mut last_frame = Instant::now();
    let mut fps = 0.0f32;

    log::info!("Controls:");
    log::info!("  Mouse drag: Adjust sliders");
    log::info!("  Space: Start");
    log::info!("  R: Reset");
    log::info!("  H: Toggle help");
    log::info!("  I: Toggle culture panel");
    log::info!("  Tab: Toggle HUD");
    log::info!("  Escape: Exit");

    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Poll);

        match event {
            Event::WindowEvent { event, .. } => {
                let hud_consumed = render_state.handle_event(&event);

                match event {
                    WindowEvent::CloseRequested => {
                        elwt.exit();
                    }
                    WindowEvent::KeyboardInput {
                        event:
                            KeyEvent {
                                physical_key: PhysicalKey::Code(key_code),
                                state: ElementState::Pressed,
                                repeat: false,
                                ..
                            },
                        ..
                    } if !render_state.hud.wants_keyboard_input() => match key_code {
                        KeyCode::Escape => elwt.exit(),
                        KeyCode::Space => controller.start(),
                        KeyCode::KeyR => {
                            controller.reset();
                            log::info!("Simulation reset");
                        }
                        KeyCode::KeyH => render_state.hud.toggle_help(),
                        KeyCode::KeyI => render_state.hud.toggle_info(),
                        KeyCode::Tab => render_state.hud.toggle_hud(),
                        _ => {}
                    },
                    WindowEvent::CursorMoved { position, .. } => {
                        // Controls live in logical points
                        let logical = position.to_logical::<f32>(window.scale_factor());
                        cursor = Vec2::new(logical.x, logical.y);
                        if mouse_pressed {
                            controller.handle_pointer(PointerEvent::Dragged(cursor));
                        }
                    }
                    WindowEvent::MouseInput {
                        state,
                        button: MouseButton::Left,
                        ..
                    } => match state {
                        ElementState::Pressed if !hud_consumed => {
                            mouse_pressed = true;
                            if let Some(action) = controller.handle_pointer(PointerEvent::Pressed(cursor)) {
                                log::info!("Button pressed: {:?}", action);
                            }
                        }
                        ElementState::Pressed => {}
                        ElementState::Released => {
                            mouse_pressed = false;
                            controller.handle_pointer(PointerEvent::Released(cursor));
                        }
                    },
                    WindowEvent::Resized(new_size) => {
                        render_state.resize(new_size);
                    }
                    WindowEvent::RedrawRequested => {
                        let now = Instant::now();
                        let frame_time = (now - last_frame).as_secs_f32();
                        last_frame = now;
                        if frame_time > 0.0 {
                            fps = fps * (1.0 - FPS_SMOOTHING) + FPS_SMOOTHING / frame_time;
                        }

                        controller.tick();

                        let metrics = SimulationMetrics::collect(&controller, fps);
                        match render_state.render(&controller, &metrics) {
                            Ok(_) => {}
                            Err(wgpu::SurfaceError::Lost) => render_state.resize(render_state.size),
                            Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                            Err(e) => log::error!("Render error: {:?}", e),
                        }
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                window.request_redraw();
            }
            _ => {}
        }
    })?;

    Ok(())
}

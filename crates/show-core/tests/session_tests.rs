use glam::Vec2;
use show_core::*;

fn phone() -> ViewportSignal {
    ViewportSignal::new(390.0, 844.0, 3.0)
}

fn session(viewport: ViewportSignal, settings: UserSettings) -> ShowSession {
    ShowSession::new(Tuning::default(), settings, viewport, 9, 0.0).unwrap()
}

fn configs(cmds: &[Command]) -> Vec<RenderConfig> {
    cmds.iter()
        .filter_map(|c| match c {
            Command::ApplyRenderConfig(r) => Some(*r),
            _ => None,
        })
        .collect()
}

/// Feed frames at `fps` until the given number of tier evaluations have run.
fn frames(s: &mut ShowSession, t: &mut f64, fps: f64, evaluations: u32) {
    for _ in 0..(evaluations * 120) {
        *t += 1000.0 / fps;
        s.on_frame(*t);
    }
}

#[test]
fn startup_emits_config_and_first_message() {
    let mut s = session(phone(), UserSettings::default());
    let cmds = s.drain_commands();
    assert_eq!(cmds.len(), 2);
    let cfg = configs(&cmds)[0];
    assert_eq!(cfg.particle_count, 50);
    assert_eq!(cfg.intensity_level, 40);
    assert!(matches!(
        &cmds[1],
        Command::Overlay(OverlayUpdate::Show { index: 0, .. })
    ));
    assert!(s.drain_commands().is_empty());
}

#[test]
fn invalid_tuning_is_rejected() {
    let mut tuning = Tuning::default();
    tuning.text.cycle_ms = -1.0;
    let err = ShowSession::new(tuning, UserSettings::default(), phone(), 0, 0.0).unwrap_err();
    assert!(matches!(err, ConfigError::NotPositive { .. }));
}

#[test]
fn tier_drop_recomputes_config() {
    let mut s = session(phone(), UserSettings::default());
    s.drain_commands();
    let mut t = 0.0;
    s.on_frame(t);
    frames(&mut s, &mut t, 40.0, 1);
    assert!(configs(&s.drain_commands()).is_empty());
    frames(&mut s, &mut t, 20.0, 1);
    assert_eq!(s.tier(), PerformanceTier::Low);
    let cfgs = configs(&s.drain_commands());
    assert_eq!(cfgs.len(), 1);
    assert_eq!(cfgs[0].particle_count, 15);
    assert_eq!(s.render_config(), cfgs[0]);
}

#[test]
fn sustained_low_tier_switches_off_high_performance() {
    let mut s = session(phone(), UserSettings::default());
    s.drain_commands();
    let mut t = 0.0;
    s.on_frame(t);
    frames(&mut s, &mut t, 40.0, 1);
    // each 20fps evaluation spans 6s
    frames(&mut s, &mut t, 20.0, 4);
    let cmds = s.drain_commands();
    let saved: Vec<_> = cmds
        .iter()
        .filter_map(|c| match c {
            Command::SaveSettings(u) => Some(*u),
            _ => None,
        })
        .collect();
    assert_eq!(saved.len(), 1);
    assert!(!saved[0].high_performance);
    assert!(!s.settings().high_performance);

    // recovering the tier no longer restores the full row
    frames(&mut s, &mut t, 40.0, 1);
    frames(&mut s, &mut t, 100.0, 1);
    assert_eq!(s.tier(), PerformanceTier::Normal);
    assert_eq!(s.render_config().particle_count, 15);
}

#[test]
fn resize_storm_recomputes_once_after_quiet_period() {
    let mut s = session(ViewportSignal::new(1920.0, 1080.0, 1.0), UserSettings::default());
    s.drain_commands();
    let mut t = 0.0;
    for i in 0..10 {
        t = i as f64 * 30.0;
        s.on_viewport(ViewportSignal::new(600.0, 900.0, 2.0), t);
        s.poll(t);
    }
    assert!(configs(&s.drain_commands()).is_empty());
    assert_eq!(s.next_deadline(), Some(t + 200.0));
    s.poll(t + 200.0);
    let cfgs = configs(&s.drain_commands());
    assert_eq!(cfgs.len(), 1);
    assert_eq!(cfgs[0].particle_count, 50);
    assert_eq!(cfgs[0].max_simultaneous_clicks, 3);
    assert!(s.profile().is_mobile);
}

#[test]
fn low_battery_on_mobile_uses_reduced_row_despite_normal_tier() {
    let mut s = session(phone(), UserSettings::default());
    s.drain_commands();
    s.on_power(
        PowerStatus {
            level: 0.1,
            charging: false,
        },
        0.0,
    );
    s.poll(1000.0);
    assert_eq!(s.tier(), PerformanceTier::Normal);
    assert!(s.profile().is_low_power);
    let cfgs = configs(&s.drain_commands());
    assert_eq!(cfgs.len(), 1);
    assert_eq!(cfgs[0].particle_count, 15);
    assert_eq!(cfgs[0].trace_length, 1);
    assert_eq!(cfgs[0].explosion_radius, 3);
}

#[test]
fn double_tap_on_mobile_triggers_haptics_and_effect() {
    let mut s = session(phone(), UserSettings::default());
    s.drain_commands();
    let at = Vec2::new(100.0, 200.0);
    s.on_touch_start(0.0, at);
    s.on_touch_end(80.0, at);
    s.on_touch_start(250.0, at);
    s.on_touch_end(320.0, at);
    let cmds = s.drain_commands();
    assert_eq!(
        cmds,
        vec![
            Command::Haptic(HapticPattern::Impact),
            Command::Haptic(HapticPattern::Explosion),
            Command::Effect {
                kind: EffectKind::Double,
                at
            },
        ]
    );
}

#[test]
fn long_press_fires_from_poll() {
    let mut s = session(phone(), UserSettings::default());
    s.drain_commands();
    s.on_touch_start(1000.0, Vec2::ZERO);
    assert_eq!(s.next_deadline(), Some(1500.0));
    s.poll(1500.0);
    s.on_touch_end(1800.0, Vec2::ZERO);
    assert_eq!(
        s.drain_commands(),
        vec![
            Command::Haptic(HapticPattern::Success),
            Command::Effect {
                kind: EffectKind::Amplified,
                at: Vec2::ZERO
            },
        ]
    );
}

#[test]
fn haptics_are_gated_on_desktop_and_by_setting() {
    let mut s = session(ViewportSignal::new(1920.0, 1080.0, 1.0), UserSettings::default());
    s.drain_commands();
    s.on_touch_start(0.0, Vec2::ZERO);
    s.on_touch_end(50.0, Vec2::ZERO);
    assert!(s.drain_commands().is_empty());

    let quiet = UserSettings {
        vibration_enabled: false,
        ..UserSettings::default()
    };
    let mut s = session(phone(), quiet);
    s.drain_commands();
    s.on_touch_start(0.0, Vec2::ZERO);
    s.poll(600.0);
    assert_eq!(
        s.drain_commands(),
        vec![Command::Effect {
            kind: EffectKind::Amplified,
            at: Vec2::ZERO
        }]
    );
}

#[test]
fn settings_change_recomputes_config() {
    let mut s = session(phone(), UserSettings::default());
    s.drain_commands();
    s.set_settings(UserSettings::default());
    assert!(s.drain_commands().is_empty());
    s.set_settings(UserSettings {
        sound_enabled: false,
        ..UserSettings::default()
    });
    let cfgs = configs(&s.drain_commands());
    assert_eq!(cfgs[0].sound_volume_range, VolumeRange::MUTED);
}

#[test]
fn text_rotation_runs_through_session() {
    let mut s = session(phone(), UserSettings::default());
    s.drain_commands();
    assert_eq!(s.next_deadline(), Some(4000.0));
    s.poll(4000.0);
    s.poll(4500.0);
    let cmds = s.drain_commands();
    assert_eq!(cmds[0], Command::Overlay(OverlayUpdate::Hide));
    assert!(matches!(
        cmds[1],
        Command::Overlay(OverlayUpdate::Show { .. })
    ));
}

#[test]
fn teardown_cancels_everything() {
    let mut s = session(phone(), UserSettings::default());
    s.on_touch_start(0.0, Vec2::ZERO);
    s.on_viewport(ViewportSignal::new(1920.0, 1080.0, 1.0), 0.0);
    s.drain_commands();
    s.teardown();
    assert!(s.is_torn_down());
    assert!(s.next_deadline().is_none());
    s.poll(60_000.0);
    s.on_touch_end(100.0, Vec2::ZERO);
    s.on_frame(1.0);
    assert!(s.drain_commands().is_empty());
}

#[test]
fn session_resumes_after_long_frozen_gap() {
    // a page restored from the back/forward cache keeps its session
    let mut s = session(phone(), UserSettings::default());
    let mut t = 0.0;
    s.on_frame(t);
    for _ in 0..60 {
        t += 16.0;
        s.on_frame(t);
    }
    s.drain_commands();

    // frozen for about ten minutes, waking 100ms past a cycle boundary
    let resumed = 600_100.0;
    s.poll(resumed);
    let overlays: Vec<_> = s
        .drain_commands()
        .into_iter()
        .filter(|c| matches!(c, Command::Overlay(_)))
        .collect();
    assert_eq!(overlays, vec![Command::Overlay(OverlayUpdate::Hide)]);
    let reveal = s.next_deadline().unwrap();
    assert!(reveal > resumed && reveal <= resumed + 500.0);

    s.poll(reveal);
    assert!(matches!(
        s.drain_commands().as_slice(),
        [Command::Overlay(OverlayUpdate::Show { .. })]
    ));

    // one huge frame delta does not flip the tier on its own
    t = resumed;
    s.on_frame(t);
    for _ in 0..60 {
        t += 16.0;
        s.on_frame(t);
    }
    assert_eq!(s.tier(), PerformanceTier::Normal);
    assert!(!s.is_torn_down());
}

use show_core::*;

fn mobile(landscape: bool) -> DeviceProfile {
    DeviceProfile {
        is_mobile: true,
        is_low_power: false,
        is_landscape: landscape,
        pixel_density: 2.0,
    }
}

fn desktop() -> DeviceProfile {
    DeviceProfile {
        is_mobile: false,
        is_low_power: false,
        is_landscape: true,
        pixel_density: 1.0,
    }
}

#[test]
fn synthesis_is_deterministic() {
    let s = UserSettings::default();
    let a = synthesize(&mobile(true), PerformanceTier::Normal, &s);
    let b = synthesize(&mobile(true), PerformanceTier::Normal, &s);
    assert_eq!(a, b);
}

#[test]
fn normal_tier_rows() {
    let s = UserSettings::default();
    let m = synthesize(&mobile(true), PerformanceTier::Normal, &s);
    assert_eq!(m.particle_count, 50);
    assert_eq!(m.trace_length, 2);
    assert_eq!(m.explosion_radius, 6);
    assert_eq!(m.intensity_level, 55);
    assert_eq!(m.max_simultaneous_clicks, 3);

    let d = synthesize(&desktop(), PerformanceTier::Normal, &s);
    assert_eq!(d.particle_count, 100);
    assert_eq!(d.trace_length, 4);
    assert_eq!(d.explosion_radius, 6);
    assert_eq!(d.max_simultaneous_clicks, 5);

    let portrait = synthesize(&mobile(false), PerformanceTier::Normal, &s);
    assert_eq!(portrait.intensity_level, 40);
}

#[test]
fn low_tier_on_mobile_changes_only_table_fields() {
    let s = UserSettings::default();
    let normal = synthesize(&mobile(true), PerformanceTier::Normal, &s);
    let low = synthesize(&mobile(true), PerformanceTier::Low, &s);
    assert_eq!(normal.particle_count, 50);
    assert_eq!(low.particle_count, 15);
    assert_eq!(low.trace_length, 1);
    assert_eq!(low.explosion_radius, 3);
    assert_eq!(low.intensity_level, 20);
    assert_eq!(low.sound_volume_range, normal.sound_volume_range);
    assert_eq!(low.max_simultaneous_clicks, normal.max_simultaneous_clicks);

    let desktop_low = synthesize(&desktop(), PerformanceTier::Low, &s);
    assert_eq!(desktop_low.particle_count, 30);
    assert_eq!(desktop_low.trace_length, 2);
}

#[test]
fn low_power_overrides_normal_tier() {
    let profile = DeviceProfile {
        is_low_power: true,
        ..mobile(true)
    };
    let s = UserSettings::default();
    let cfg = synthesize(&profile, PerformanceTier::Normal, &s);
    assert_eq!(cfg, synthesize(&mobile(true), PerformanceTier::Low, &s));
}

#[test]
fn disabled_high_performance_uses_reduced_row() {
    let s = UserSettings {
        high_performance: false,
        ..UserSettings::default()
    };
    let cfg = synthesize(&desktop(), PerformanceTier::Normal, &s);
    assert_eq!(cfg.particle_count, 30);
    assert_eq!(cfg.intensity_level, 20);
}

#[test]
fn sound_range_follows_setting() {
    let on = synthesize(&desktop(), PerformanceTier::Normal, &UserSettings::default());
    assert_eq!(on.sound_volume_range, VolumeRange { min: 5, max: 25 });

    let muted = UserSettings {
        sound_enabled: false,
        ..UserSettings::default()
    };
    let off = synthesize(&desktop(), PerformanceTier::Normal, &muted);
    assert_eq!(off.sound_volume_range.max, 0);
    assert_eq!(off.sound_volume_range, VolumeRange::MUTED);
}

#[test]
fn render_config_serializes_in_camel_case() {
    let cfg = synthesize(&desktop(), PerformanceTier::Normal, &UserSettings::default());
    let json = serde_json::to_value(cfg).unwrap();
    assert_eq!(json["particleCount"], 100);
    assert_eq!(json["soundVolumeRange"]["max"], 25);
    assert_eq!(json["maxSimultaneousClicks"], 5);
}

//! Integration tests for the request → merge → codec → double-send pipeline.

use log::Level;

use samsung_ac_ir::app::events::ClimateEvent;
use samsung_ac_ir::climate::codec::{CodecFan, CodecMode};
use samsung_ac_ir::climate::controller::SETTLE_DELAY_MS;
use samsung_ac_ir::climate::{ClimateMode, FanSpeed, SwingMode};
use samsung_ac_ir::{ClimateController, ControllerConfig, StateChangeRequest, ThermostatState};

use super::mock_hw::{
    EventRecorder, Journal, MockCodec, MockDelay, RecordingSink, TxCall, journal, sends,
};

type TestController = ClimateController<MockCodec, MockDelay, RecordingSink>;

fn make_controller_with(
    config: &ControllerConfig,
    codec_horizontal: bool,
) -> (TestController, Journal, RecordingSink) {
    let j = journal();
    let diag = RecordingSink::new();
    let c = ClimateController::new(
        config,
        MockCodec::with_horizontal(j.clone(), codec_horizontal),
        MockDelay::new(j.clone()),
        diag.clone(),
    );
    (c, j, diag)
}

fn make_controller() -> (TestController, Journal, RecordingSink) {
    make_controller_with(&ControllerConfig::default(), true)
}

fn temperature_sent_for(requested: f32) -> Option<u8> {
    let (mut c, j, _) = make_controller();
    let mut events = EventRecorder::new();
    c.apply(
        &StateChangeRequest::new()
            .with_mode(ClimateMode::Cool)
            .with_target_temperature(requested),
        &mut events,
    );
    let sent = sends(&j);
    sent.last().and_then(|cmd| cmd.temperature)
}

// ── Setup & traits ───────────────────────────────────────────

#[test]
fn setup_publishes_initial_state_without_transmitting() {
    let (mut c, j, diag) = make_controller();
    let mut events = EventRecorder::new();

    c.setup(&mut events);

    assert_eq!(j.borrow().as_slice(), &[TxCall::Begin]);
    assert_eq!(events.events.len(), 2);
    assert_eq!(events.events[0], ClimateEvent::Started { tx_pin: 4 });
    assert!(matches!(events.events[1], ClimateEvent::StatePublished(s) if s.mode == ClimateMode::Off));
    assert_eq!(diag.at(Level::Info), vec!["Initialized on GPIO4".to_owned()]);
}

#[test]
fn traits_without_swing_axes_only_offer_off() {
    let config = ControllerConfig {
        supports_vertical_swing: false,
        supports_horizontal_swing: false,
        ..ControllerConfig::default()
    };
    let (c, _, _) = make_controller_with(&config, true);
    let t = c.traits();
    assert_eq!(t.swing_modes.as_slice(), &[SwingMode::Off]);
    assert_eq!(t.min_temperature, 16);
    assert_eq!(t.max_temperature, 30);
    assert_eq!(t.modes.len(), 6);
    assert_eq!(t.fan_speeds.len(), 4);
}

#[test]
fn traits_with_both_axes_offer_both() {
    let (c, _, _) = make_controller();
    assert!(c.traits().supports_swing(SwingMode::Both));
}

// ── Change detection ─────────────────────────────────────────

#[test]
fn empty_request_never_transmits() {
    let (mut c, j, _) = make_controller();
    let mut events = EventRecorder::new();

    c.apply(&StateChangeRequest::new(), &mut events);

    assert!(j.borrow().is_empty());
    assert!(events.events.is_empty());
}

#[test]
fn request_matching_current_state_is_a_no_op() {
    let (mut c, j, _) = make_controller();
    let mut events = EventRecorder::new();

    // Defaults are Off / 24 / High / Both.
    c.apply(
        &StateChangeRequest::new()
            .with_mode(ClimateMode::Off)
            .with_target_temperature(24.0)
            .with_fan_speed(FanSpeed::High)
            .with_swing(SwingMode::Both),
        &mut events,
    );

    assert!(j.borrow().is_empty());
    assert!(events.events.is_empty());
}

#[test]
fn same_request_twice_transmits_once() {
    let (mut c, j, _) = make_controller();
    let mut events = EventRecorder::new();
    let req = StateChangeRequest::new()
        .with_mode(ClimateMode::Heat)
        .with_target_temperature(26.0);

    c.apply(&req, &mut events);
    c.apply(&req, &mut events);

    assert_eq!(sends(&j).len(), 2, "only the first call should transmit");
    assert_eq!(events.events.len(), 1, "only the first call should publish");
}

#[test]
fn nan_temperature_does_not_retransmit_on_empty_request() {
    let (mut c, j, _) = make_controller();
    let mut events = EventRecorder::new();

    c.apply(
        &StateChangeRequest::new().with_target_temperature(f32::NAN),
        &mut events,
    );
    assert_eq!(sends(&j).len(), 2);
    assert_eq!(c.last_command().map(|s| s.temperature), Some(16));
    assert_eq!(events.events.len(), 1);

    c.apply(&StateChangeRequest::new(), &mut events);
    c.apply(
        &StateChangeRequest::new().with_target_temperature(f32::NAN),
        &mut events,
    );

    assert_eq!(sends(&j).len(), 2, "stored NaN must not count as a change");
    assert_eq!(events.events.len(), 1);
}

// ── Double transmission ──────────────────────────────────────

#[test]
fn change_sends_twice_with_settle_delay_between() {
    let (mut c, j, _) = make_controller();
    let mut events = EventRecorder::new();

    c.apply(&StateChangeRequest::new().with_mode(ClimateMode::Cool), &mut events);

    let calls = j.borrow().clone();
    let sends_at: Vec<usize> = calls
        .iter()
        .enumerate()
        .filter(|(_, c)| matches!(c, TxCall::Send(_)))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(sends_at.len(), 2);
    assert_eq!(sends_at[1], sends_at[0] + 2, "exactly one call between sends");
    assert_eq!(calls[sends_at[0] + 1], TxCall::DelayMs(SETTLE_DELAY_MS));
    assert_eq!(SETTLE_DELAY_MS, 120);
    assert_eq!(sends_at[1], calls.len() - 1, "second send is the last call");

    let sent = sends(&j);
    assert_eq!(sent[0], sent[1], "both bursts must carry the same command");
}

#[test]
fn publishes_merged_state_after_transmitting() {
    let (mut c, _, _) = make_controller();
    let mut events = EventRecorder::new();

    c.apply(
        &StateChangeRequest::new()
            .with_mode(ClimateMode::Dry)
            .with_fan_speed(FanSpeed::Low),
        &mut events,
    );

    let [ClimateEvent::StatePublished(s)] = events.events.as_slice() else {
        panic!("expected exactly one StatePublished, got {:?}", events.events);
    };
    assert!(s.power);
    assert_eq!(s.mode, ClimateMode::Dry);
    assert_eq!(s.fan_speed, Some(FanSpeed::Low));
    assert_eq!(c.state(), s);
}

#[test]
fn power_on_reflects_seeded_state() {
    let (c, j, _) = make_controller();
    let c = c.with_state(ThermostatState {
        power: true,
        mode: ClimateMode::Cool,
        ..ThermostatState::default()
    });
    assert!(c.power_on());
    assert!(c.last_command().is_none());
    assert!(j.borrow().is_empty());
}

// ── Command assembly ─────────────────────────────────────────

#[test]
fn temperature_is_rounded_and_clamped() {
    assert_eq!(temperature_sent_for(35.0), Some(30));
    assert_eq!(temperature_sent_for(10.4), Some(16));
    assert_eq!(temperature_sent_for(21.5), Some(22));
    assert_eq!(temperature_sent_for(22.4), Some(22));
    assert_eq!(temperature_sent_for(16.0), Some(16));
    assert_eq!(temperature_sent_for(30.0), Some(30));
}

#[test]
fn state_keeps_requested_temperature() {
    let (mut c, _, _) = make_controller();
    c.apply(
        &StateChangeRequest::new().with_target_temperature(35.0),
        &mut EventRecorder::new(),
    );
    assert!((c.state().target_temperature - 35.0).abs() < f32::EPSILON);
    assert_eq!(c.last_command().map(|s| s.temperature), Some(30));
}

#[test]
fn every_mode_maps_to_its_codec_mode() {
    let cases = [
        (ClimateMode::Cool, CodecMode::Cool),
        (ClimateMode::Heat, CodecMode::Heat),
        (ClimateMode::Dry, CodecMode::Dry),
        (ClimateMode::FanOnly, CodecMode::Fan),
        (ClimateMode::Auto, CodecMode::Auto),
    ];
    for (mode, expected) in cases {
        let (mut c, j, _) = make_controller();
        c.apply(&StateChangeRequest::new().with_mode(mode), &mut EventRecorder::new());
        let sent = sends(&j);
        assert_eq!(sent[0].power, Some(true), "{mode:?}");
        assert_eq!(sent[0].mode, Some(expected), "{mode:?}");
    }
}

#[test]
fn off_powers_down_without_touching_mode() {
    let (mut c, j, _) = make_controller();
    let mut events = EventRecorder::new();
    c.apply(&StateChangeRequest::new().with_mode(ClimateMode::Cool), &mut events);
    j.borrow_mut().clear();

    c.apply(&StateChangeRequest::new().with_mode(ClimateMode::Off), &mut events);

    let calls = j.borrow();
    assert!(calls.contains(&TxCall::Power(false)));
    assert!(!calls.iter().any(|c| matches!(c, TxCall::Mode(_))));
    assert!(!c.power_on());
}

#[test]
fn every_fan_speed_maps_to_its_codec_fan() {
    let cases = [
        (FanSpeed::Auto, CodecFan::Auto),
        (FanSpeed::Low, CodecFan::Low),
        (FanSpeed::Medium, CodecFan::Med),
        (FanSpeed::High, CodecFan::High),
    ];
    for (fan, expected) in cases {
        let (mut c, j, _) = make_controller();
        c.apply(
            &StateChangeRequest::new()
                .with_mode(ClimateMode::Cool)
                .with_fan_speed(fan),
            &mut EventRecorder::new(),
        );
        assert_eq!(sends(&j)[0].fan, Some(expected), "{fan:?}");
    }
}

#[test]
fn diagnostic_record_describes_what_was_sent() {
    let (mut c, _, diag) = make_controller();
    c.apply(
        &StateChangeRequest::new()
            .with_mode(ClimateMode::Heat)
            .with_target_temperature(31.2)
            .with_fan_speed(FanSpeed::Low)
            .with_swing(SwingMode::Off),
        &mut EventRecorder::new(),
    );
    assert_eq!(
        diag.at(Level::Info),
        vec!["Send IR: power=on mode=HEAT temp=30 fan=LOW swing=OFF".to_owned()]
    );
    assert!(diag.at(Level::Warn).is_empty());
}

// ── Swing gating ─────────────────────────────────────────────

#[test]
fn both_without_horizontal_support_actuates_vertical_only() {
    let config = ControllerConfig {
        supports_horizontal_swing: false,
        ..ControllerConfig::default()
    };
    let (mut c, j, diag) = make_controller_with(&config, true);

    c.apply(
        &StateChangeRequest::new()
            .with_mode(ClimateMode::Cool)
            .with_swing(SwingMode::Both),
        &mut EventRecorder::new(),
    );

    let calls = j.borrow();
    assert!(calls.contains(&TxCall::VerticalSwing(true)));
    assert!(!calls.iter().any(|c| matches!(c, TxCall::HorizontalSwing(_))));
    assert!(diag.at(Level::Warn).is_empty());
}

#[test]
fn both_axes_supported_actuates_both() {
    let (mut c, j, _) = make_controller();
    c.apply(
        &StateChangeRequest::new()
            .with_mode(ClimateMode::Cool)
            .with_swing(SwingMode::Horizontal),
        &mut EventRecorder::new(),
    );
    let sent = sends(&j);
    assert_eq!(sent[0].vertical_swing, Some(false));
    assert_eq!(sent[0].horizontal_swing, Some(true));
}

#[test]
fn horizontal_on_codec_without_actuation_warns_and_still_sends() {
    let (mut c, j, diag) = make_controller_with(&ControllerConfig::default(), false);
    let mut events = EventRecorder::new();

    c.apply(
        &StateChangeRequest::new()
            .with_mode(ClimateMode::Cool)
            .with_swing(SwingMode::Horizontal),
        &mut events,
    );

    let warnings = diag.at(Level::Warn);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("horizontal"));
    assert!(!j.borrow().iter().any(|c| matches!(c, TxCall::HorizontalSwing(_))));
    assert_eq!(sends(&j).len(), 2, "rest of the request is still honoured");
    assert_eq!(c.state().swing, SwingMode::Horizontal, "state is not rolled back");
    assert_eq!(events.events.len(), 1);
}

#[test]
fn vertical_without_vertical_axis_is_not_actuated() {
    let config = ControllerConfig {
        supports_vertical_swing: false,
        ..ControllerConfig::default()
    };
    let (mut c, j, _) = make_controller_with(&config, true);
    c.apply(
        &StateChangeRequest::new()
            .with_mode(ClimateMode::Cool)
            .with_swing(SwingMode::Vertical),
        &mut EventRecorder::new(),
    );
    assert!(!j.borrow().iter().any(|c| matches!(c, TxCall::VerticalSwing(_))));
    assert_eq!(sends(&j)[0].horizontal_swing, Some(false));
}

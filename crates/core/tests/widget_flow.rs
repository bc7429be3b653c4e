//! End-to-end tests for the projector widget
//!
//! These drive the assembled widget through the in-memory host seams: typing
//! into the spend input, letting virtual time pass and reading the slots.

use std::rc::Rc;
use std::time::Duration;

use projector_core::config::DEFAULT_CONTACT_URL;
use projector_core::{
    FixedSpendSource, InputEvent, ManualScheduler, MemoryDisplay, Period, ProjectorConfig,
    RecordingNavigator, SlotKey, Tier, Widget,
};

type TestWidget = Widget<FixedSpendSource, MemoryDisplay, ManualScheduler, RecordingNavigator>;

struct Harness {
    widget: TestWidget,
    input: FixedSpendSource,
    display: Rc<MemoryDisplay>,
    clock: ManualScheduler,
    navigator: RecordingNavigator,
}

impl Harness {
    fn new(initial: &str) -> Result<Self, String> {
        let config = ProjectorConfig::default();
        let tiers = config.tier_list().map_err(|e| e.to_string())?;
        let display = Rc::new(MemoryDisplay::with_slots(tiers.slots(), "£0.00"));
        let input = FixedSpendSource::new(initial);
        let clock = ManualScheduler::new();
        let navigator = RecordingNavigator::new();

        let widget = Widget::build(
            &config,
            input.clone(),
            Rc::clone(&display),
            clock.clone(),
            navigator.clone(),
        )
        .map_err(|e| e.to_string())?;

        Ok(Self {
            widget,
            input,
            display,
            clock,
            navigator,
        })
    }

    fn type_in(&self, raw: &str) {
        self.input.set(raw);
        self.widget.controller.handle(InputEvent::Changing);
    }

    fn settle(&self) {
        self.clock.advance(Duration::from_millis(150));
    }

    fn slot(&self, tier: u32, period: Period) -> Result<String, String> {
        let tier = Tier::new(tier).map_err(|e| e.to_string())?;
        self.display
            .text(&SlotKey::new(tier, period))
            .ok_or_else(|| format!("slot {tier}-{period} missing"))
    }

    fn all_slots(&self) -> Result<Vec<String>, String> {
        let mut texts = Vec::new();
        for tier in [100, 200, 300] {
            for period in Period::ALL {
                texts.push(self.slot(tier, period)?);
            }
        }
        Ok(texts)
    }
}

#[test]
fn test_spend_ten_end_to_end() -> Result<(), String> {
    let harness = Harness::new("")?;
    harness.widget.controller.start();

    harness.type_in("10");
    harness.settle();

    assert_eq!(
        harness.all_slots()?,
        vec![
            "£1,000.00",
            "£12,000.00",
            "£2,000.00",
            "£24,000.00",
            "£3,000.00",
            "£36,000.00",
        ]
    );
    Ok(())
}

#[test]
fn test_zero_spend_shows_zero_everywhere() -> Result<(), String> {
    let harness = Harness::new("0")?;
    let report = harness.widget.controller.start();
    harness.settle();

    assert_eq!(report.unchanged, 6);
    assert!(harness.all_slots()?.iter().all(|text| text == "£0.00"));
    Ok(())
}

#[test]
fn test_abc_behaves_like_empty() -> Result<(), String> {
    let typed_abc = Harness::new("5")?;
    typed_abc.widget.controller.start();
    typed_abc.settle();
    typed_abc.type_in("abc");
    typed_abc.settle();

    let typed_empty = Harness::new("5")?;
    typed_empty.widget.controller.start();
    typed_empty.settle();
    typed_empty.type_in("");
    typed_empty.settle();

    assert_eq!(typed_abc.all_slots()?, typed_empty.all_slots()?);
    assert!(typed_abc.all_slots()?.iter().all(|text| text == "£0.00"));
    Ok(())
}

#[test]
fn test_text_only_changes_after_delay() -> Result<(), String> {
    let harness = Harness::new("")?;
    harness.type_in("1");

    harness.clock.advance(Duration::from_millis(100));
    assert_eq!(harness.slot(100, Period::Monthly)?, "£0.00");

    harness.clock.advance(Duration::from_millis(50));
    assert_eq!(harness.slot(100, Period::Monthly)?, "£100.00");
    assert_eq!(harness.slot(100, Period::Annual)?, "£1,200.00");
    Ok(())
}

#[test]
fn test_rapid_typing_converges_on_last_value() -> Result<(), String> {
    let harness = Harness::new("")?;
    for raw in ["1", "12", "125", "125.5"] {
        harness.type_in(raw);
        harness.clock.advance(Duration::from_millis(10));
    }
    harness.clock.run_all();

    assert_eq!(harness.slot(300, Period::Monthly)?, "£37,650.00");
    assert_eq!(harness.slot(300, Period::Annual)?, "£451,800.00");
    Ok(())
}

#[test]
fn test_commit_event_after_typing_is_noop() -> Result<(), String> {
    let harness = Harness::new("")?;
    harness.type_in("2");
    harness.settle();

    let report = harness.widget.controller.handle(InputEvent::Committed);
    assert_eq!(report.unchanged, 6);
    assert_eq!(harness.clock.pending(), 0);

    let slot = SlotKey::monthly(Tier::new(200).map_err(|e| e.to_string())?);
    let state = harness.display.state(&slot).ok_or("slot missing")?;
    assert_eq!((state.transitions, state.commits), (1, 1));
    Ok(())
}

#[test]
fn test_contact_ignores_spend() -> Result<(), String> {
    let harness = Harness::new("")?;

    harness.widget.contact.open();
    harness.type_in("99");
    harness.settle();
    harness.widget.contact.open();

    let opened: Vec<String> = harness
        .navigator
        .opened()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(opened, vec![DEFAULT_CONTACT_URL, DEFAULT_CONTACT_URL]);
    Ok(())
}

#[test]
fn test_half_penny_rounds_up() -> Result<(), String> {
    let harness = Harness::new("")?;

    harness.type_in("0.00125");
    harness.settle();
    assert_eq!(harness.slot(100, Period::Monthly)?, "£0.13");

    harness.type_in("0.00625");
    harness.settle();
    assert_eq!(harness.slot(100, Period::Monthly)?, "£0.63");
    Ok(())
}

#[test]
fn test_out_of_range_spend_shows_zero_everywhere() -> Result<(), String> {
    let harness = Harness::new("10")?;
    harness.widget.controller.start();
    harness.settle();

    harness.type_in("1e306");
    harness.settle();

    assert!(harness.all_slots()?.iter().all(|text| text == "£0.00"));
    Ok(())
}

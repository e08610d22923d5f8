use chrono::{NaiveDate, NaiveDateTime};
use datetimefield::DateTimeField;
use datetimefield::config::{ConfigLoader, WidgetConfig};
use datetimefield::error::{ConfigurationError, RenderError};
use datetimefield::fields::error::FieldError;
use datetimefield::fields::{FieldKind, FieldType};
use datetimefield::locale::PlatformLocale;
use datetimefield::sync::{EditKind, SyncEvent};
use datetimefield::widget::{ControlWidget, HostElement, InputElement};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use std::path::PathBuf;
use std::time::Duration;

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[fixture]
fn reference() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2021, 11, 20)
        .unwrap()
        .and_hms_opt(14, 45, 10)
        .unwrap()
}

fn rendered(
    config: WidgetConfig,
    value: &str,
    reference: NaiveDateTime,
) -> DateTimeField<InputElement> {
    let host = InputElement::text("start", value).with_class("form-control");
    let mut field =
        DateTimeField::with_reference(host, config, PlatformLocale::new("en-US"), reference)
            .unwrap();
    field.render().unwrap();
    field
}

#[rstest]
fn test_date_field_reformats_on_commit(reference: NaiveDateTime) {
    let config = WidgetConfig::new(FieldType::Date).with_output_format("d/m/Y");
    let mut field = rendered(config, "2022-06-15", reference);

    assert!(field.host().is_hidden());
    assert_eq!(field.composed().unwrap(), "15/06/2022");
    assert_eq!(field.host().value(), "2022-06-15");

    field.type_value(FieldKind::Day, "20", ms(0)).unwrap();
    assert_eq!(field.advance(ms(599)).unwrap(), vec![]);

    let events = field.advance(ms(600)).unwrap();

    assert_eq!(
        events,
        vec![SyncEvent::Committed {
            kind: FieldKind::Day,
            value: "20".to_string()
        }]
    );
    assert_eq!(field.host().value(), "20/06/2022");
}

#[rstest]
fn test_datetime_field_rolls_back_invalid_minutes(reference: NaiveDateTime) {
    let mut field = rendered(WidgetConfig::default(), "2022-01-05 09:30:00", reference);

    let values: Vec<&str> = FieldKind::ALL_KINDS
        .iter()
        .filter_map(|kind| field.value(*kind))
        .collect();
    assert_eq!(values, vec!["2022", "01", "05", "09", "30", "00"]);

    field.type_value(FieldKind::Minutes, "75", ms(0)).unwrap();
    let events = field.advance(ms(600)).unwrap();

    assert_eq!(
        events,
        vec![SyncEvent::RolledBack {
            kind: FieldKind::Minutes,
            rejected: "75".to_string(),
            restored: "30".to_string()
        }]
    );
    assert_eq!(field.value(FieldKind::Minutes), Some("30"));
    assert_eq!(field.host().value(), "2022-01-05 09:30:00");
}

#[rstest]
fn test_impossible_day_is_rolled_back(reference: NaiveDateTime) {
    let mut field = rendered(WidgetConfig::new(FieldType::Date), "2022-04-10", reference);

    field.type_value(FieldKind::Day, "31", ms(0)).unwrap();
    field.advance(ms(600)).unwrap();

    assert_eq!(field.value(FieldKind::Day), Some("10"));
    assert_eq!(field.host().value(), "2022-04-10");
}

#[rstest]
fn test_keystrokes_are_coalesced(reference: NaiveDateTime) {
    let mut field = rendered(WidgetConfig::new(FieldType::Date), "2022-04-10", reference);

    field.type_value(FieldKind::Day, "1", ms(0)).unwrap();
    field.type_value(FieldKind::Day, "15", ms(300)).unwrap();

    assert_eq!(field.advance(ms(600)).unwrap(), vec![]);
    assert_eq!(field.next_deadline(), Some(ms(900)));

    let events = field.advance(ms(900)).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(field.host().value(), "2022-04-15");
}

#[rstest]
fn test_empty_field_clears_output_until_fixed(reference: NaiveDateTime) {
    let mut field = rendered(WidgetConfig::new(FieldType::Date), "2022-04-10", reference);

    let event = field
        .input(FieldKind::Year, "", EditKind::DeleteBackward, ms(0))
        .unwrap();

    assert_eq!(
        event,
        SyncEvent::Errored(FieldError::Empty {
            kind: FieldKind::Year
        })
    );
    assert_eq!(field.host().value(), "");
    let wrapper = field.wrapper().unwrap();
    assert!(wrapper.control(FieldKind::Year).unwrap().error);

    field.type_value(FieldKind::Year, "2023", ms(100)).unwrap();
    field.advance(ms(700)).unwrap();

    assert_eq!(field.host().value(), "2023-04-10");
    assert!(!field.wrapper().unwrap().control(FieldKind::Year).unwrap().error);
}

#[rstest]
fn test_backspace_waits_longer_before_flagging_short_year(reference: NaiveDateTime) {
    let mut field = rendered(WidgetConfig::new(FieldType::Date), "2022-04-10", reference);

    field.type_value(FieldKind::Year, "202", ms(0)).unwrap();

    assert_eq!(field.advance(ms(600)).unwrap(), vec![]);
    let events = field.advance(ms(1200)).unwrap();

    assert!(matches!(
        events.as_slice(),
        [SyncEvent::Errored(FieldError::TooShort { min: 4, found: 3, .. })]
    ));
    assert_eq!(field.host().value(), "");
}

#[rstest]
fn test_errored_field_blocks_output_of_other_commits(reference: NaiveDateTime) {
    let mut field = rendered(WidgetConfig::default(), "2022-04-10 08:15:00", reference);

    field
        .input(FieldKind::Minutes, "", EditKind::DeleteBackward, ms(0))
        .unwrap();
    field.type_value(FieldKind::Day, "20", ms(0)).unwrap();
    let events = field.advance(ms(600)).unwrap();

    assert_eq!(
        events,
        vec![SyncEvent::Committed {
            kind: FieldKind::Day,
            value: "20".to_string()
        }]
    );
    assert_eq!(field.host().value(), "");
    assert_eq!(field.composed().unwrap(), "2022-04-20 08::00");
}

#[rstest]
fn test_month_outside_range_is_rolled_back(reference: NaiveDateTime) {
    let mut field = rendered(WidgetConfig::new(FieldType::Date), "2022-04-10", reference);

    let event = field.select(FieldKind::Month, "13").unwrap();

    assert!(matches!(event, SyncEvent::RolledBack { ref restored, .. } if restored == "04"));
    assert_eq!(field.host().value(), "2022-04-10");
}

#[rstest]
fn test_empty_value_is_seeded_from_reference(reference: NaiveDateTime) {
    let field = rendered(WidgetConfig::new(FieldType::Time), "", reference);

    assert_eq!(field.composed().unwrap(), "14:45:10");
    assert_eq!(field.value(FieldKind::Year), None);
}

#[rstest]
#[case("en-US", vec![FieldKind::Month, FieldKind::Day, FieldKind::Year])]
#[case("fr-FR", vec![FieldKind::Day, FieldKind::Month, FieldKind::Year])]
#[case("ja", vec![FieldKind::Year, FieldKind::Month, FieldKind::Day])]
fn test_controls_follow_locale_order(
    reference: NaiveDateTime,
    #[case] lang: &str,
    #[case] date_order: Vec<FieldKind>,
) {
    let host = InputElement::text("start", "2022-04-10 08:00:00").with_class("form-control");
    let mut field = DateTimeField::with_reference(
        host,
        WidgetConfig::default(),
        PlatformLocale::new(lang),
        reference,
    )
    .unwrap();
    field.render().unwrap();

    let wrapper = field.wrapper().unwrap();
    let mut expected = date_order;
    expected.extend([FieldKind::Hours, FieldKind::Minutes, FieldKind::Seconds]);
    assert_eq!(wrapper.order(), expected);
    assert_eq!(
        wrapper.classes,
        vec!["datetimefield-wrapper".to_string(), "form-control".to_string()]
    );
    assert_eq!(
        wrapper.control(FieldKind::Minutes).unwrap().name,
        "start__datetimefield_minutes"
    );
    assert!(matches!(
        wrapper.control(FieldKind::Month).unwrap().widget,
        ControlWidget::Select { ref options } if options.len() == 12
    ));
}

#[rstest]
fn test_format_mismatch_leaves_host_untouched(reference: NaiveDateTime) {
    let host = InputElement::text("start", "2022-06");
    let mut field = DateTimeField::with_reference(
        host,
        WidgetConfig::new(FieldType::Date),
        PlatformLocale::default(),
        reference,
    )
    .unwrap();

    assert!(matches!(field.render(), Err(RenderError::Format { .. })));
    assert!(!field.host().is_hidden());
    assert!(field.wrapper().is_none());
    assert!(matches!(
        field.type_value(FieldKind::Day, "01", ms(0)),
        Err(RenderError::NotRendered(_))
    ));
}

#[rstest]
fn test_render_twice_fails(reference: NaiveDateTime) {
    let mut field = rendered(WidgetConfig::new(FieldType::Date), "2022-04-10", reference);
    assert!(matches!(
        field.render(),
        Err(RenderError::AlreadyRendered(name)) if name == "start"
    ));
}

#[rstest]
fn test_rejects_non_text_host(reference: NaiveDateTime) {
    let host = InputElement {
        input_type: Some("checkbox".to_string()),
        ..InputElement::text("start", "")
    };
    let result =
        DateTimeField::with_reference(host, WidgetConfig::default(), PlatformLocale::default(), reference);
    assert!(matches!(
        result,
        Err(ConfigurationError::NotSingleLineText(t)) if t == "checkbox"
    ));
}

#[rstest]
fn test_rejects_format_not_matching_type(reference: NaiveDateTime) {
    let config = WidgetConfig::new(FieldType::Date).with_output_format("H:i:s");
    let result = DateTimeField::with_reference(
        InputElement::text("start", ""),
        config,
        PlatformLocale::default(),
        reference,
    );
    assert!(matches!(result, Err(ConfigurationError::InvalidConfig(_))));
}

#[rstest]
fn test_field_from_config_file(reference: NaiveDateTime) {
    let manifest_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let config_path = manifest_path.join("tests/assets/date_widget.yaml");
    let config: WidgetConfig = ConfigLoader::load(config_path).unwrap();
    let locale = PlatformLocale::new(config.lang.as_deref().unwrap());

    let mut field = DateTimeField::with_reference(
        InputElement::text("birthday", "1990-02-03"),
        config,
        locale,
        reference,
    )
    .unwrap();
    field.render().unwrap();

    assert_eq!(field.composed().unwrap(), "03/02/1990");
    assert_eq!(
        field.wrapper().unwrap().order(),
        vec![FieldKind::Day, FieldKind::Month, FieldKind::Year]
    );

    field.select(FieldKind::Month, "12").unwrap();
    assert_eq!(field.host().value(), "03/12/1990");
}

#[rstest]
#[case("+5")]
#[case("-0")]
#[case(" 7")]
fn test_signed_minutes_never_reach_host(reference: NaiveDateTime, #[case] raw: &str) {
    let mut field = rendered(WidgetConfig::new(FieldType::Time), "09:30:00", reference);
    field.type_value(FieldKind::Hours, "10", ms(0)).unwrap();
    field.advance(ms(600)).unwrap();
    assert_eq!(field.host().value(), "10:30:00");

    field.type_value(FieldKind::Minutes, raw, ms(1000)).unwrap();
    field.advance(ms(2200)).unwrap();

    assert_eq!(field.value(FieldKind::Minutes), Some("30"));
    assert_eq!(field.host().value(), "10:30:00");
}

#[rstest]
fn test_select_is_only_for_the_month(reference: NaiveDateTime) {
    let mut field = rendered(WidgetConfig::new(FieldType::Date), "2022-04-10", reference);

    assert!(matches!(
        field.select(FieldKind::Year, "12"),
        Err(RenderError::Field(FieldError::NotAChoice(FieldKind::Year)))
    ));
    assert!(matches!(
        field.select(FieldKind::Day, ""),
        Err(RenderError::Field(FieldError::NotAChoice(FieldKind::Day)))
    ));
    assert_eq!(field.value(FieldKind::Year), Some("2022"));
    assert_eq!(field.value(FieldKind::Day), Some("10"));
    assert_eq!(field.host().value(), "2022-04-10");
}

use crate::config::WidgetConfig;
use crate::error::{ConfigurationError, RenderError};
use crate::fields::{FieldHalf, FieldKind, FieldStore, FieldValues};
use crate::format::{FormatString, codec};
use crate::locale::{LocaleProvider, PlatformLocale};
use crate::sync::{EditKind, SyncEngine, SyncEvent};
use crate::validation::CalendarValidator;
use crate::widget::control::{FieldWrapper, SubFieldControl};
use crate::widget::element::{HostElement, validate_host};
use chrono::{Local, NaiveDateTime};
use log::{debug, error, info};
use std::time::Duration;
use validator::Validate;

/// Replaces a text input holding a date, time or datetime with one control per
/// component and keeps the input's value in sync with them.
///
/// The input's value is overwritten with the composed output after every
/// commit and cleared whenever a component is empty or too short.
#[derive(Debug)]
pub struct DateTimeField<H: HostElement, L: LocaleProvider = PlatformLocale> {
    host: H,
    name: String,
    config: WidgetConfig,
    input_format: FormatString,
    output_format: FormatString,
    locale: L,
    reference: NaiveDateTime,
    engine: Option<SyncEngine>,
    wrapper: Option<FieldWrapper>,
}

impl<H: HostElement> DateTimeField<H> {
    /// Attaches to `host` with the locale from the config or the environment,
    /// using the current local time as reference instant.
    pub fn new(host: H, config: WidgetConfig) -> Result<Self, ConfigurationError> {
        let locale = match config.lang.as_deref() {
            Some(lang) => PlatformLocale::new(lang),
            None => PlatformLocale::from_env(),
        };
        Self::with_reference(host, config, locale, Local::now().naive_local())
    }
}

impl<H: HostElement, L: LocaleProvider> DateTimeField<H, L> {
    pub fn with_reference(
        host: H,
        config: WidgetConfig,
        locale: L,
        reference: NaiveDateTime,
    ) -> Result<Self, ConfigurationError> {
        let name = validate_host(&host).inspect_err(|err| error!("{err}"))?;
        config.validate().inspect_err(|err| error!("{err}"))?;
        config.warn_unsupported_options();

        Ok(DateTimeField {
            host,
            name,
            input_format: config.input_format(),
            output_format: config.output_format(),
            config,
            locale,
            reference,
            engine: None,
            wrapper: None,
        })
    }

    /// Decodes the host's value, seeds the components and builds the controls.
    ///
    /// Components missing from the value start at the reference instant. When
    /// the value does not match the input format nothing is rendered and the
    /// host is left untouched.
    pub fn render(&mut self) -> Result<(), RenderError> {
        if self.engine.is_some() {
            return Err(RenderError::AlreadyRendered(self.name.clone()));
        }

        let field_type = self.config.field_type;
        let parsed = codec::parse(field_type, &self.input_format, self.host.value()).map_err(
            |source| {
                let err = RenderError::Format {
                    name: self.name.clone(),
                    source,
                };
                error!("{err}");
                err
            },
        )?;

        let validator = CalendarValidator::new(self.reference);
        let seed: FieldValues = field_type
            .active_fields()
            .iter()
            .map(|kind| {
                let value = parsed
                    .get(kind)
                    .cloned()
                    .unwrap_or_else(|| validator.current(*kind));
                (*kind, value)
            })
            .collect();
        let engine = SyncEngine::new(FieldStore::new(field_type, &seed), validator);

        let controls = field_type
            .halves()
            .iter()
            .flat_map(|half| match half {
                FieldHalf::Date => self.locale.date_order(),
                FieldHalf::Time => self.locale.time_order(),
            })
            .map(|kind| SubFieldControl::new(&self.name, kind, &self.locale))
            .collect();

        self.wrapper = Some(FieldWrapper::new(self.host.attribute("class"), controls));
        self.engine = Some(engine);
        self.host.hide();
        info!("Rendered {field_type} field '{}'", self.name);
        Ok(())
    }

    /// Forwards a raw edit of one control. See [`SyncEngine::edit`].
    pub fn input(
        &mut self,
        kind: FieldKind,
        raw: &str,
        edit: EditKind,
        now: Duration,
    ) -> Result<SyncEvent, RenderError> {
        let event = self.engine_mut()?.edit(kind, raw, edit, now)?;
        self.apply(&event);
        Ok(event)
    }

    /// Like [`DateTimeField::input`] with the edit kind inferred from the previous value.
    pub fn type_value(
        &mut self,
        kind: FieldKind,
        raw: &str,
        now: Duration,
    ) -> Result<SyncEvent, RenderError> {
        let previous = self.value(kind).unwrap_or_default().to_string();
        let edit = EditKind::between(&previous, raw);
        self.input(kind, raw, edit, now)
    }

    /// Forwards a pick from the month list.
    pub fn select(&mut self, kind: FieldKind, raw: &str) -> Result<SyncEvent, RenderError> {
        let event = self.engine_mut()?.select(kind, raw)?;
        self.apply(&event);
        Ok(event)
    }

    /// Lets every debounce timer due at `now` fire.
    pub fn advance(&mut self, now: Duration) -> Result<Vec<SyncEvent>, RenderError> {
        let events = self.engine_mut()?.advance(now)?;
        events.iter().for_each(|event| self.apply(event));
        Ok(events)
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.engine.as_ref().and_then(SyncEngine::next_deadline)
    }

    /// The output format filled with the current components.
    pub fn composed(&self) -> Option<String> {
        self.engine
            .as_ref()
            .map(|engine| self.output_format.render(engine.store().values()))
    }

    pub fn value(&self, kind: FieldKind) -> Option<&str> {
        self.engine.as_ref().and_then(|engine| engine.store().get(kind))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn wrapper(&self) -> Option<&FieldWrapper> {
        self.wrapper.as_ref()
    }

    pub fn engine(&self) -> Option<&SyncEngine> {
        self.engine.as_ref()
    }

    fn engine_mut(&mut self) -> Result<&mut SyncEngine, RenderError> {
        self.engine
            .as_mut()
            .ok_or_else(|| RenderError::NotRendered(self.name.clone()))
    }

    fn apply(&mut self, event: &SyncEvent) {
        let kind = event.kind();
        let errored = matches!(event, SyncEvent::Errored(_));
        if let Some(control) = self.wrapper.as_mut().and_then(|w| w.control_mut(kind)) {
            control.error = errored;
        }

        match event {
            SyncEvent::Errored(_) => self.host.set_value(String::new()),
            SyncEvent::Committed { .. } => {
                let has_errors = self.engine.as_ref().is_some_and(SyncEngine::has_errors);
                match self.composed() {
                    Some(output) if !has_errors => {
                        debug!("Writing '{output}' to '{}'", self.name);
                        self.host.set_value(output);
                    }
                    _ => debug!(
                        "Not writing '{}', another component is in error.",
                        self.name
                    ),
                }
            }
            SyncEvent::Scheduled { .. } | SyncEvent::RolledBack { .. } => {}
        }
    }
}

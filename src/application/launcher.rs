//! Engine launch phase.
//!
//! Engines are built strictly in order: sources, oracle, STOC, TLE. The
//! sources belong to the oracle step, so a bad endpoint is an oracle failure.
//! The first construction failure aborts the sequence; nothing after it is
//! built.

use tracing::{error, info};

use crate::application::context::EngineSet;
use crate::domain::engine::EngineKind;
use crate::error::EngineError;
use crate::infrastructure::config::settings::Settings;
use crate::port::outbound::engine::EngineFactory;
use crate::port::outbound::notifier::{StartupEvent, StartupNotifier};

/// Builds the fixed engine set through an [`EngineFactory`].
pub struct EngineLauncher<'a, F: EngineFactory> {
    factory: &'a F,
    notifier: &'a dyn StartupNotifier,
}

impl<'a, F: EngineFactory> EngineLauncher<'a, F> {
    pub fn new(factory: &'a F, notifier: &'a dyn StartupNotifier) -> Self {
        Self { factory, notifier }
    }

    /// Construct every engine in launch order.
    ///
    /// # Errors
    /// Returns the first construction failure.
    pub fn launch(&self, settings: &Settings) -> Result<EngineSet<F>, EngineError> {
        let oracle = self.step(EngineKind::Oracle, || {
            let sources = settings
                .source_endpoints
                .iter()
                .map(|endpoint| self.factory.source(endpoint))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|err| err.attributed_to(EngineKind::Oracle))?;
            self.factory.oracle(sources)
        })?;
        let stoc = self.step(EngineKind::Stoc, || self.factory.stoc(settings.stoc_live))?;
        let tle = self.step(EngineKind::Tle, || self.factory.tle(settings.tle_mode))?;

        Ok(EngineSet { oracle, stoc, tle })
    }

    fn step<T>(
        &self,
        kind: EngineKind,
        build: impl FnOnce() -> Result<T, EngineError>,
    ) -> Result<T, EngineError> {
        self.notifier.notify(StartupEvent::EngineStarting(kind));
        match build() {
            Ok(engine) => {
                info!(engine = kind.label(), "Engine started");
                self.notifier.notify(StartupEvent::EngineStarted(kind));
                Ok(engine)
            }
            Err(err) => {
                error!(engine = kind.label(), error = %err, "Engine construction failed");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::outbound::engine::{StocMode, TleMode};
    use crate::testkit::engine::RecordingEngineFactory;
    use crate::testkit::notifier::RecordingNotifier;

    #[test]
    fn builds_engines_in_order() {
        let factory = RecordingEngineFactory::new();
        let notifier = RecordingNotifier::new();

        let engines = EngineLauncher::new(&factory, &notifier)
            .launch(&Settings::default())
            .unwrap();

        assert_eq!(
            factory.constructed(),
            vec![
                EngineKind::Source,
                EngineKind::Oracle,
                EngineKind::Stoc,
                EngineKind::Tle
            ]
        );
        assert_eq!(engines.tle.mode(), TleMode::Active);
        assert_eq!(engines.stoc.mode(), StocMode::Paper);
    }

    #[test]
    fn builds_one_source_per_endpoint() {
        let factory = RecordingEngineFactory::new();
        let notifier = RecordingNotifier::new();
        let settings = Settings {
            source_endpoints: vec!["https://a.example/".into(), "https://b.example/".into()],
            ..Settings::default()
        };

        let engines = EngineLauncher::new(&factory, &notifier)
            .launch(&settings)
            .unwrap();

        assert_eq!(engines.oracle.sources().len(), 2);
    }

    #[test]
    fn failure_stops_the_sequence() {
        for failing in [EngineKind::Oracle, EngineKind::Stoc, EngineKind::Tle] {
            let factory = RecordingEngineFactory::failing_at(failing);
            let notifier = RecordingNotifier::new();

            let err = EngineLauncher::new(&factory, &notifier)
                .launch(&Settings::default())
                .err()
                .expect("launch should fail");

            assert_eq!(err.engine(), failing);
            let constructed = factory.constructed();
            assert!(!constructed.contains(&failing));
            let position = EngineKind::LAUNCH_ORDER
                .iter()
                .position(|kind| *kind == failing)
                .unwrap();
            assert_eq!(constructed, EngineKind::LAUNCH_ORDER[..position].to_vec());
            assert!(!notifier.contains(&StartupEvent::EngineStarted(failing)));
        }
    }

    #[test]
    fn source_failure_prevents_oracle() {
        let factory = RecordingEngineFactory::failing_at(EngineKind::Source);
        let notifier = RecordingNotifier::new();

        let err = EngineLauncher::new(&factory, &notifier)
            .launch(&Settings::default())
            .err()
            .expect("launch should fail");

        assert_eq!(err.engine(), EngineKind::Oracle);
        assert!(factory.constructed().is_empty());
        assert!(notifier.contains(&StartupEvent::EngineStarting(EngineKind::Oracle)));
        assert!(!notifier.contains(&StartupEvent::EngineStarted(EngineKind::Oracle)));
    }

    #[test]
    fn malformed_endpoint_is_an_oracle_failure() {
        let factory = RecordingEngineFactory::new();
        let notifier = RecordingNotifier::new();
        let settings = Settings {
            source_endpoints: vec!["https://a.example/".into(), "not a url".into()],
            ..Settings::default()
        };

        let err = EngineLauncher::new(&factory, &notifier)
            .launch(&settings)
            .err()
            .expect("launch should fail");

        assert_eq!(err.engine(), EngineKind::Oracle);
        assert!(err.to_string().contains("invalid endpoint 'not a url'"));
        assert!(!factory.constructed().contains(&EngineKind::Oracle));
    }

    #[test]
    fn sources_are_not_announced_separately() {
        let factory = RecordingEngineFactory::new();
        let notifier = RecordingNotifier::new();

        EngineLauncher::new(&factory, &notifier)
            .launch(&Settings::default())
            .unwrap();

        let started: Vec<EngineKind> = notifier
            .events()
            .into_iter()
            .filter_map(|e| match e {
                StartupEvent::EngineStarted(kind) => Some(kind),
                _ => None,
            })
            .collect();
        assert_eq!(
            started,
            vec![EngineKind::Oracle, EngineKind::Stoc, EngineKind::Tle]
        );
    }
}

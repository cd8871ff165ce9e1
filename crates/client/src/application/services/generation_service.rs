//! Generation Service - validate, build, fetch and route one submission

use std::sync::Arc;
use std::time::Duration;

use cochar_domain::{Catalog, FieldBundle, FormValidator, ValidationReport};
use cochar_shared::{CharacterData, GenerateCharacterQuery};

use crate::application::dispatch::route_reply;
use crate::application::error::GenerateError;
use crate::application::request_builder::RequestBuilder;
use crate::application::submit_control::SubmitControl;
use crate::ports::outbound::{ApiError, CharacterApiPort};

/// Default time to wait for the service before giving up.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Default pause before the submit control accepts the next submission.
pub const DEFAULT_REENABLE_DELAY: Duration = Duration::from_millis(250);

/// Timing knobs for a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSettings {
    pub request_timeout: Duration,
    pub reenable_delay: Duration,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            reenable_delay: DEFAULT_REENABLE_DELAY,
        }
    }
}

/// Character generation use case.
///
/// A submission is validated locally first; nothing is sent for an invalid
/// form. Valid forms produce exactly one request, which is never retried.
#[derive(Clone)]
pub struct GenerationService {
    api: Arc<dyn CharacterApiPort>,
    catalog: Arc<Catalog>,
    control: SubmitControl,
    settings: GenerationSettings,
}

impl GenerationService {
    pub fn new(
        api: Arc<dyn CharacterApiPort>,
        catalog: Arc<Catalog>,
        settings: GenerationSettings,
    ) -> Self {
        Self {
            api,
            catalog,
            control: SubmitControl::new(),
            settings,
        }
    }

    /// The submit control guarding [`Self::submit`].
    pub fn control(&self) -> &SubmitControl {
        &self.control
    }

    pub fn validate(&self, bundle: &FieldBundle) -> ValidationReport {
        FormValidator::new(&self.catalog).validate(bundle)
    }

    /// Validate the bundle and translate it into query parameters.
    pub fn build_query(&self, bundle: &FieldBundle) -> Result<GenerateCharacterQuery, GenerateError> {
        let report = self.validate(bundle);
        if !report.is_valid() {
            tracing::info!(report = %report, "Form rejected locally");
            return Err(GenerateError::Invalid(report));
        }
        Ok(RequestBuilder::new(&self.catalog).build(bundle)?)
    }

    /// Run one generation round trip without touching the submit control.
    pub async fn generate(&self, bundle: &FieldBundle) -> Result<CharacterData, GenerateError> {
        let query = self.build_query(bundle)?;
        let timeout = self.settings.request_timeout;

        let reply = match tokio::time::timeout(timeout, self.api.get_character(&query)).await {
            Ok(Ok(reply)) => reply,
            Ok(Err(ApiError::Timeout)) | Err(_) => {
                tracing::error!(timeout_ms = timeout.as_millis() as u64, "Character request timed out");
                return Err(GenerateError::TimedOut(timeout));
            }
            Ok(Err(e)) => {
                tracing::error!(error = %e, "Character request failed");
                return Err(e.into());
            }
        };

        let status = reply.status;
        match route_reply(reply) {
            Ok(character) => {
                tracing::info!(
                    first_name = %character.first_name,
                    last_name = %character.last_name,
                    "Character generated"
                );
                Ok(character)
            }
            Err(GenerateError::Rejected(rejection)) => {
                tracing::warn!(
                    status,
                    origin = rejection.origin.as_deref().unwrap_or("-"),
                    message = %rejection.message,
                    "Service rejected the request"
                );
                Err(GenerateError::Rejected(rejection))
            }
            Err(e) => {
                tracing::error!(status, error = %e, "Unexpected reply from service");
                Err(e)
            }
        }
    }

    /// Submit the form through the single-flight control.
    ///
    /// Refused with [`GenerateError::Busy`] while another submission is
    /// running. The control is re-enabled after the re-enable delay on every
    /// outcome.
    pub async fn submit(&self, bundle: &FieldBundle) -> Result<CharacterData, GenerateError> {
        let Some(permit) = self.control.try_begin() else {
            tracing::debug!("Submit ignored, request already in flight");
            return Err(GenerateError::Busy);
        };

        let result = self.generate(bundle).await;

        if !self.settings.reenable_delay.is_zero() {
            tokio::time::sleep(self.settings.reenable_delay).await;
        }
        drop(permit);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error::Rejection;
    use crate::ports::outbound::{MockCharacterApiPort, RawReply};
    use async_trait::async_trait;
    use cochar_domain::FieldId;
    use serde_json::json;

    fn fast_settings() -> GenerationSettings {
        GenerationSettings {
            request_timeout: Duration::from_secs(5),
            reenable_delay: Duration::ZERO,
        }
    }

    fn service(api: impl CharacterApiPort + 'static, settings: GenerationSettings) -> GenerationService {
        GenerationService::new(Arc::new(api), Arc::new(Catalog::standard()), settings)
    }

    fn character_body() -> serde_json::Value {
        json!({
            "first_name": "Adam", "last_name": "Walkiewicz", "sex": "M", "age": 30,
            "occupation": "author", "country": "PL", "year": 1925,
            "strength": 50, "condition": 45, "size": 60, "dexterity": 55,
            "appearance": 40, "education": 80, "intelligence": 75, "power": 65,
            "luck": 35, "damage_bonus": "0", "build": 0, "doge": 27,
            "move_rate": 8, "hit_points": 10, "magic_points": 13,
            "sanity_points": 65, "skills": { "library use": 70 }
        })
    }

    fn valid_form() -> FieldBundle {
        FieldBundle::new()
            .with(FieldId::Country, "(PL) Poland")
            .with(FieldId::Sex, "Male")
            .with(FieldId::Occupation, "Author")
    }

    /// Port that answers after a fixed delay.
    struct SlowApi {
        delay: Duration,
    }

    #[async_trait]
    impl CharacterApiPort for SlowApi {
        async fn get_character(&self, _query: &GenerateCharacterQuery) -> Result<RawReply, ApiError> {
            tokio::time::sleep(self.delay).await;
            Ok(RawReply::new(200, Some(character_body())))
        }
    }

    #[tokio::test]
    async fn invalid_form_never_reaches_the_port() {
        let mut api = MockCharacterApiPort::new();
        api.expect_get_character().never();
        let service = service(api, fast_settings());

        let bundle = FieldBundle::new()
            .with(FieldId::Age, "10")
            .with(FieldId::FirstName, "Bob")
            .with(FieldId::Country, "(US) United States")
            .with(FieldId::Sex, "Male");

        match service.submit(&bundle).await {
            Err(GenerateError::Invalid(report)) => {
                assert_eq!(report.failed_fields(), vec![FieldId::Age]);
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
        assert!(service.control().is_enabled());
    }

    #[tokio::test]
    async fn valid_form_sends_codes_and_returns_character() {
        let mut api = MockCharacterApiPort::new();
        api.expect_get_character()
            .withf(|query| {
                query.country.as_deref() == Some("PL")
                    && query.sex.as_deref() == Some("M")
                    && query.occupation.as_deref() == Some("author")
                    && !query.random_mode
            })
            .times(1)
            .returning(|_| Ok(RawReply::new(200, Some(character_body()))));
        let service = service(api, fast_settings());

        let character = service.submit(&valid_form()).await.expect("character");
        assert_eq!(character.last_name, "Walkiewicz");
        assert_eq!(character.skills.get("library use"), Some(&70));
        assert!(service.control().is_enabled());
    }

    #[tokio::test]
    async fn rejection_is_surfaced_with_server_message() {
        let mut api = MockCharacterApiPort::new();
        api.expect_get_character().times(1).returning(|_| {
            Ok(RawReply::new(
                429,
                Some(json!({ "status": "fail", "message": "rate limited" })),
            ))
        });
        let service = service(api, fast_settings());

        let err = service.submit(&valid_form()).await.expect_err("rejected");
        assert_eq!(
            err,
            GenerateError::Rejected(Rejection {
                status: 429,
                origin: None,
                message: "rate limited".into(),
            })
        );
        assert!(service.control().is_enabled());
    }

    #[tokio::test]
    async fn transport_failure_is_a_fetch_error() {
        let mut api = MockCharacterApiPort::new();
        api.expect_get_character()
            .times(1)
            .returning(|_| Err(ApiError::RequestFailed("connection refused".into())));
        let service = service(api, fast_settings());

        let err = service.generate(&valid_form()).await.expect_err("fetch error");
        assert!(matches!(err, GenerateError::Fetch(ref m) if m.contains("connection refused")));
        assert!(!err.is_local());
    }

    #[tokio::test]
    async fn adapter_timeout_maps_to_timed_out() {
        let mut api = MockCharacterApiPort::new();
        api.expect_get_character()
            .times(1)
            .returning(|_| Err(ApiError::Timeout));
        let service = service(api, fast_settings());

        let err = service.generate(&valid_form()).await.expect_err("timeout");
        assert_eq!(err, GenerateError::TimedOut(Duration::from_secs(5)));
    }

    #[tokio::test]
    async fn slow_service_times_out_and_reenables() {
        let settings = GenerationSettings {
            request_timeout: Duration::from_millis(20),
            reenable_delay: Duration::from_millis(5),
        };
        let service = service(
            SlowApi {
                delay: Duration::from_millis(500),
            },
            settings,
        );

        let err = service.submit(&valid_form()).await.expect_err("timeout");
        assert_eq!(err, GenerateError::TimedOut(Duration::from_millis(20)));
        assert!(service.control().is_enabled());
    }

    #[tokio::test(start_paused = true)]
    async fn control_stays_disabled_for_the_reenable_delay() {
        let mut api = MockCharacterApiPort::new();
        api.expect_get_character()
            .times(1)
            .returning(|_| Ok(RawReply::new(200, Some(character_body()))));
        let settings = GenerationSettings {
            request_timeout: Duration::from_secs(5),
            reenable_delay: Duration::from_millis(250),
        };
        let service = service(api, settings);
        let start = tokio::time::Instant::now();

        let task = {
            let service = service.clone();
            tokio::spawn(async move { service.submit(&valid_form()).await })
        };

        tokio::time::sleep(Duration::from_millis(249)).await;
        assert!(!service.control().is_enabled());
        assert!(!task.is_finished());

        let result = task.await.expect("submit task");
        assert!(result.is_ok());
        assert!(service.control().is_enabled());
        assert!(start.elapsed() >= Duration::from_millis(250));
    }

    #[tokio::test]
    async fn submit_while_pending_is_busy() {
        let mut api = MockCharacterApiPort::new();
        api.expect_get_character().never();
        let service = service(api, fast_settings());

        let _permit = service.control().try_begin().expect("permit");
        let err = service.submit(&valid_form()).await.expect_err("busy");
        assert_eq!(err, GenerateError::Busy);
    }

    #[tokio::test]
    async fn concurrent_submits_send_one_request() {
        let service = service(
            SlowApi {
                delay: Duration::from_millis(30),
            },
            fast_settings(),
        );
        let form = valid_form();

        let (first, second) = tokio::join!(service.submit(&form), service.submit(&form));

        assert!(first.is_ok());
        assert_eq!(second, Err(GenerateError::Busy));
        assert!(service.control().is_enabled());
    }

    #[tokio::test]
    async fn unmapped_occupation_set_fails_before_sending() {
        let mut api = MockCharacterApiPort::new();
        api.expect_get_character().never();
        let service = service(api, fast_settings());

        let bundle = valid_form().with(FieldId::OccupationSet, "Pulp Cthulhu");
        let err = service.submit(&bundle).await.expect_err("build error");
        assert!(matches!(err, GenerateError::Build(_)));
        assert!(err.is_local());
    }
}

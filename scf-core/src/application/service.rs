// scf-core/src/application/service.rs
//
// Validated facade over the query engine. Presentation adapters (CLI, tool calls,
// REST) go through here so that argument checks, limit clamping and registry
// look-ups behave the same everywhere.

use chrono::Utc;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::application::query::{
    FrameworkControlRow, FrameworkGroup, Mapping, QueryEngine, SearchHit, Statistics,
};
use crate::domain::catalog::{Control, Framework, FrameworkMappings};
use crate::domain::configuration::SearchSettings;
use crate::domain::error::{DomainError, FrameworkRole};

pub const SERVICE_NAME: &str = "security-controls";
pub const TOP_FRAMEWORKS: usize = 10;

// --- DTOs ---

/// A control as presented to callers; mappings are optional.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlView {
    pub id: String,
    pub domain: String,
    pub name: String,
    pub description: String,
    pub weight: u8,
    pub pptdf: String,
    pub validation_cadence: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework_mappings: Option<FrameworkMappings>,
}

impl ControlView {
    fn from_control(control: &Control, include_mappings: bool) -> Self {
        Self {
            id: control.id.clone(),
            domain: control.domain.clone(),
            name: control.name.clone(),
            description: control.description.clone(),
            weight: control.weight,
            pptdf: control.pptdf.clone(),
            validation_cadence: control.validation_cadence.clone(),
            framework_mappings: include_mappings.then(|| control.framework_mappings.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub count: usize,
    pub results: Vec<SearchHit>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameworkListResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub count: usize,
    pub frameworks: Vec<Framework>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameworkControlsResponse {
    pub framework: String,
    pub name: String,
    pub count: usize,
    pub controls: Vec<FrameworkControlRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappingResponse {
    pub source_framework: String,
    pub source_name: String,
    pub target_framework: String,
    pub target_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_control: Option<String>,
    pub count: usize,
    pub mappings: Vec<Mapping>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolveResponse {
    pub framework: String,
    pub native_control: String,
    pub scf_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoResponse {
    pub service: String,
    pub version: String,
    pub database: String,
    #[serde(flatten)]
    pub statistics: Statistics,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthReport {
    pub status: String,
    pub timestamp: String,
    pub service: String,
    pub database_version: String,
    pub controls_count: usize,
    pub frameworks_count: usize,
}

// --- SERVICE ---

pub struct ControlService<'a> {
    engine: QueryEngine<'a>,
    search: SearchSettings,
    database_version: String,
}

impl<'a> ControlService<'a> {
    pub fn new(
        engine: QueryEngine<'a>,
        search: SearchSettings,
        database_version: impl Into<String>,
    ) -> Self {
        Self {
            engine,
            search,
            database_version: database_version.into(),
        }
    }

    pub fn engine(&self) -> QueryEngine<'a> {
        self.engine
    }

    #[instrument(skip(self))]
    pub fn get_control(
        &self,
        control_id: &str,
        include_mappings: bool,
    ) -> Result<ControlView, DomainError> {
        let control_id = require(control_id, "control_id")?;
        let control = self
            .engine
            .get_control(control_id)
            .ok_or_else(|| DomainError::ControlNotFound(control_id.to_string()))?;
        Ok(ControlView::from_control(control, include_mappings))
    }

    #[instrument(skip(self))]
    pub fn search(
        &self,
        query: &str,
        frameworks: &[String],
        limit: Option<i64>,
    ) -> Result<SearchResponse, DomainError> {
        let query = require(query, "query")?;
        let limit = self.search.resolve_limit(limit);
        let results = self.engine.search_controls(query, Some(frameworks), limit);
        debug!(hits = results.len(), limit, "Search finished");
        Ok(SearchResponse {
            query: query.to_string(),
            count: results.len(),
            results,
        })
    }

    pub fn list_frameworks(
        &self,
        category: Option<&str>,
    ) -> Result<FrameworkListResponse, DomainError> {
        let category = category.filter(|c| !c.trim().is_empty());
        let frameworks = self.engine.list_frameworks(category).ok_or_else(|| {
            DomainError::CategoryNotFound {
                category: category.unwrap_or_default().to_string(),
                available: self.engine.categories().join(", "),
            }
        })?;
        Ok(FrameworkListResponse {
            category: category.map(str::to_string),
            count: frameworks.len(),
            frameworks: frameworks.into_iter().cloned().collect(),
        })
    }

    pub fn frameworks_by_category(&self) -> Vec<FrameworkGroup> {
        self.engine.frameworks_by_category()
    }

    #[instrument(skip(self))]
    pub fn framework_controls(
        &self,
        framework: &str,
        include_descriptions: bool,
    ) -> Result<FrameworkControlsResponse, DomainError> {
        let framework = require(framework, "framework")?;
        let info = self.registered(framework, FrameworkRole::Requested)?;
        let controls = self
            .engine
            .get_framework_controls(framework, include_descriptions);
        Ok(FrameworkControlsResponse {
            framework: info.key.clone(),
            name: info.name.clone(),
            count: controls.len(),
            controls,
        })
    }

    #[instrument(skip(self))]
    pub fn map_frameworks(
        &self,
        source_framework: &str,
        target_framework: &str,
        source_control: Option<&str>,
    ) -> Result<MappingResponse, DomainError> {
        let source_framework = require(source_framework, "source_framework")?;
        let target_framework = require(target_framework, "target_framework")?;
        let source = self.registered(source_framework, FrameworkRole::Source)?;
        let target = self.registered(target_framework, FrameworkRole::Target)?;
        let source_control = source_control.filter(|c| !c.trim().is_empty());

        let mappings = self
            .engine
            .map_frameworks(source_framework, target_framework, source_control);
        debug!(rows = mappings.len(), "Framework mapping finished");

        Ok(MappingResponse {
            source_framework: source.key.clone(),
            source_name: source.name.clone(),
            target_framework: target.key.clone(),
            target_name: target.name.clone(),
            source_control: source_control.map(str::to_string),
            count: mappings.len(),
            mappings,
        })
    }

    pub fn resolve_native_control(
        &self,
        framework: &str,
        native_control: &str,
    ) -> Result<ResolveResponse, DomainError> {
        let framework = require(framework, "framework")?;
        let native_control = require(native_control, "native_control")?;
        self.registered(framework, FrameworkRole::Requested)?;
        Ok(ResolveResponse {
            framework: framework.to_string(),
            native_control: native_control.to_string(),
            scf_ids: self
                .engine
                .resolve_native_control(framework, native_control)
                .to_vec(),
        })
    }

    pub fn info(&self) -> InfoResponse {
        InfoResponse {
            service: SERVICE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database: self.database_version.clone(),
            statistics: self.engine.statistics(TOP_FRAMEWORKS),
        }
    }

    pub fn health(&self) -> HealthReport {
        let stats = self.engine.statistics(0);
        HealthReport {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            service: SERVICE_NAME.to_string(),
            database_version: self.database_version.clone(),
            controls_count: stats.controls,
            frameworks_count: stats.frameworks,
        }
    }

    /// Registry display name, or the key itself for unregistered frameworks.
    pub fn framework_display_name<'k>(&self, key: &'k str) -> &'k str
    where
        'a: 'k,
    {
        self.engine
            .dataset()
            .frameworks()
            .get(key)
            .map(|fw| fw.name.as_str())
            .unwrap_or(key)
    }

    fn registered(&self, key: &str, role: FrameworkRole) -> Result<&'a Framework, DomainError> {
        let registry = self.engine.dataset().frameworks();
        registry
            .get(key)
            .ok_or_else(|| DomainError::FrameworkNotFound {
                role,
                key: key.to_string(),
                available: registry.keys().collect::<Vec<_>>().join(", "),
            })
    }
}

/// Required string argument; blank counts as missing.
fn require<'s>(value: &'s str, field: &'static str) -> Result<&'s str, DomainError> {
    if value.trim().is_empty() {
        Err(DomainError::MissingArgument(field))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::domain::dataset::Dataset;
    use crate::testing::fixture_dataset;

    fn service(dataset: &Dataset) -> ControlService<'_> {
        ControlService::new(
            QueryEngine::new(dataset),
            SearchSettings::default(),
            "SCF 2025.4",
        )
    }

    #[test]
    fn test_get_control_with_and_without_mappings() {
        let dataset = fixture_dataset();
        let service = service(&dataset);

        let view = service.get_control("GOV-01", true).unwrap();
        assert_eq!(view.name, "Cybersecurity Governance Program");
        assert!(view.framework_mappings.is_some());

        let view = service.get_control("GOV-01", false).unwrap();
        assert!(view.framework_mappings.is_none());
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("framework_mappings").is_none());
    }

    #[test]
    fn test_get_control_not_found() {
        let dataset = fixture_dataset();
        let err = service(&dataset).get_control("XYZ-99", true).unwrap_err();
        assert_eq!(err, DomainError::ControlNotFound("XYZ-99".to_string()));
        assert_eq!(err.to_string(), "Control XYZ-99 not found");
    }

    #[test]
    fn test_required_arguments() {
        let dataset = fixture_dataset();
        let service = service(&dataset);
        assert_eq!(
            service.get_control("  ", true).unwrap_err(),
            DomainError::MissingArgument("control_id")
        );
        assert_eq!(
            service.search("", &[], None).unwrap_err(),
            DomainError::MissingArgument("query")
        );
        assert_eq!(
            service.map_frameworks("dora", "", None).unwrap_err(),
            DomainError::MissingArgument("target_framework")
        );
        assert_eq!(
            service.map_frameworks("", "", None).unwrap_err().to_string(),
            "source_framework is required"
        );
    }

    #[test]
    fn test_search_limit_is_clamped() {
        let dataset = fixture_dataset();
        let service = service(&dataset);
        // "o" matches most of the fixture
        assert_eq!(service.search("o", &[], Some(0)).unwrap().count, 1);
        assert_eq!(service.search("o", &[], Some(-3)).unwrap().count, 1);
        assert_eq!(service.search("o", &[], Some(2)).unwrap().count, 2);
        let all = service.search("o", &[], Some(10_000)).unwrap();
        assert_eq!(all.count, all.results.len());
    }

    #[test]
    fn test_search_empty_result_is_not_an_error() {
        let dataset = fixture_dataset();
        let response = service(&dataset).search("blockchain", &[], None).unwrap();
        assert_eq!(response.count, 0);
        assert!(response.results.is_empty());
    }

    #[test]
    fn test_framework_controls_requires_registered_key() {
        let dataset = fixture_dataset();
        let service = service(&dataset);

        let response = service.framework_controls("dora", false).unwrap();
        assert_eq!(response.name, "Digital Operational Resilience Act (DORA)");
        assert_eq!(response.count, 4);

        for key in ["not_a_real_framework", "pci_dss_4.0.1", "internal_baseline"] {
            let err = service.framework_controls(key, false).unwrap_err();
            match err {
                DomainError::FrameworkNotFound {
                    role, available, ..
                } => {
                    assert_eq!(role, FrameworkRole::Requested);
                    assert_eq!(available, "soc_2_tsc, iso_27001_2022, gdpr, nist_csf_2.0, dora");
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_map_checks_source_before_target() {
        let dataset = fixture_dataset();
        let service = service(&dataset);

        let err = service.map_frameworks("fake", "also_fake", None).unwrap_err();
        assert!(matches!(
            err,
            DomainError::FrameworkNotFound { role: FrameworkRole::Source, .. }
        ));
        assert!(err.to_string().starts_with("Source framework 'fake' not found"));

        let err = service.map_frameworks("dora", "fake", None).unwrap_err();
        assert!(matches!(
            err,
            DomainError::FrameworkNotFound { role: FrameworkRole::Target, .. }
        ));
    }

    #[test]
    fn test_map_response() {
        let dataset = fixture_dataset();
        let response = service(&dataset)
            .map_frameworks("iso_27001_2022", "dora", Some("5.1"))
            .unwrap();
        assert_eq!(response.count, 2);
        assert_eq!(response.source_control.as_deref(), Some("5.1"));
        assert_eq!(response.target_name, "Digital Operational Resilience Act (DORA)");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["mappings"][1]["target_controls"], serde_json::json!([]));
    }

    #[test]
    fn test_blank_source_control_means_unfiltered() {
        let dataset = fixture_dataset();
        let response = service(&dataset)
            .map_frameworks("iso_27001_2022", "dora", Some(" "))
            .unwrap();
        assert_eq!(response.count, 6);
        assert!(response.source_control.is_none());
    }

    #[test]
    fn test_list_frameworks_category() {
        let dataset = fixture_dataset();
        let service = service(&dataset);

        assert_eq!(service.list_frameworks(None).unwrap().count, 5);
        let privacy = service.list_frameworks(Some("privacy")).unwrap();
        assert_eq!(privacy.frameworks[0].key, "gdpr");

        let err = service.list_frameworks(Some("fake_category")).unwrap_err();
        match err {
            DomainError::CategoryNotFound { available, .. } => {
                assert!(available.starts_with("ai_governance, iso_standards"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_resolve_native_control() {
        let dataset = fixture_dataset();
        let response = service(&dataset)
            .resolve_native_control("soc_2_tsc", "CC6.1")
            .unwrap();
        assert_eq!(response.scf_ids, vec!["CRY-01", "CRY-05", "IAC-01"]);
    }

    #[test]
    fn test_info_and_health() {
        let dataset = fixture_dataset();
        let service = service(&dataset);

        let info = service.info();
        assert_eq!(info.statistics.controls, 8);
        assert_eq!(info.statistics.top_frameworks.len(), 5);
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["database"], "SCF 2025.4");
        assert_eq!(json["frameworks"], 5);

        let health = service.health();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.controls_count, 8);
        assert!(chrono::DateTime::parse_from_rfc3339(&health.timestamp).is_ok());
    }

    #[test]
    fn test_framework_display_name_falls_back_to_key() {
        let dataset = fixture_dataset();
        let service = service(&dataset);
        assert_eq!(service.framework_display_name("gdpr"), "General Data Protection Regulation (GDPR)");
        assert_eq!(service.framework_display_name("internal_baseline"), "internal_baseline");
    }
}

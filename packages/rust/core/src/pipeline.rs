//! End-to-end build pipeline: fetch → cross-reference → compose → persist.

use std::path::PathBuf;
use std::time::Instant;

use tracing::{info, instrument, warn};

use partialgen_compose::{build_linkable_terms, classify, compose_faq, compose_glossary};
use partialgen_shared::Result;
use partialgen_source::ContentSource;

use crate::writer::write_partial;

/// Configuration for one build run.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Project name to look up in the workspace.
    pub project_name: String,
    /// Directory the partials are written into.
    pub output_dir: PathBuf,
    /// Glossary partial file name.
    pub glossary_file: String,
    /// FAQ partial file name.
    pub faq_file: String,
}

/// Result of a completed build run.
#[derive(Debug)]
pub struct BuildResult {
    /// Path of the written glossary partial.
    pub glossary_path: PathBuf,
    /// Path of the written FAQ partial.
    pub faq_path: PathBuf,
    /// Definitions that passed classification and were published.
    pub definitions_published: usize,
    /// Definitions excluded by classification.
    pub definitions_skipped: usize,
    /// FAQ entries rendered.
    pub faq_entries: usize,
    /// Distinct FAQ sections.
    pub faq_sections: usize,
    /// Total elapsed time.
    pub elapsed: std::time::Duration,
}

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter: Send + Sync {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called when the pipeline completes.
    fn done(&self, result: &BuildResult);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn done(&self, _result: &BuildResult) {}
}

/// Run the full build pipeline.
///
/// Strictly sequential: fetch the project, its FAQ entries, and its
/// definitions; build the cross-reference table; compose both fragments;
/// write both files. Any error aborts the remaining steps — a partial
/// written before the failure stays on disk.
#[instrument(skip_all, fields(project = %config.project_name))]
pub async fn build_partials<S: ContentSource>(
    config: &BuildConfig,
    source: &S,
    progress: &dyn ProgressReporter,
) -> Result<BuildResult> {
    let start = Instant::now();

    info!(project = %config.project_name, "starting build");

    // --- Fetch ---
    progress.phase("Fetching project");
    let project = source.find_project(&config.project_name).await?;

    progress.phase("Fetching FAQ entries");
    let faqs = source.list_faqs(&project.id).await?;

    progress.phase("Fetching definitions");
    let definitions = source.list_definitions(&project.id).await?;

    info!(
        faqs = faqs.len(),
        definitions = definitions.len(),
        "content fetched"
    );

    // --- Cross-reference table ---
    progress.phase("Building cross-reference table");
    let terms = build_linkable_terms(&project, &definitions);

    let definitions_skipped = definitions
        .iter()
        .filter(|d| !classify(d).is_valid())
        .count();
    let definitions_published = definitions.len() - definitions_skipped;
    if definitions_skipped > 0 {
        warn!(
            skipped = definitions_skipped,
            "some definitions are not publish-ready"
        );
    }

    // --- Compose ---
    progress.phase("Composing glossary");
    let glossary = compose_glossary(&definitions, &terms);

    progress.phase("Composing FAQ");
    let faq = compose_faq(&faqs, &terms);

    // --- Persist ---
    progress.phase("Writing partials");
    let glossary_outcome = write_partial(&config.output_dir, &config.glossary_file, &glossary)?;
    let faq_outcome = write_partial(&config.output_dir, &config.faq_file, &faq)?;

    let result = BuildResult {
        glossary_path: glossary_outcome.path,
        faq_path: faq_outcome.path,
        definitions_published,
        definitions_skipped,
        faq_entries: faqs.len(),
        faq_sections: count_sections(&faqs),
        elapsed: start.elapsed(),
    };

    progress.done(&result);

    info!(
        definitions_published = result.definitions_published,
        definitions_skipped = result.definitions_skipped,
        faq_entries = result.faq_entries,
        elapsed_ms = result.elapsed.as_millis(),
        "build complete"
    );

    Ok(result)
}

/// Count distinct FAQ sections in first-seen order.
fn count_sections(faqs: &[partialgen_shared::FaqEntry]) -> usize {
    let mut seen: Vec<&str> = Vec::new();
    for entry in faqs {
        if !seen.contains(&entry.section.as_str()) {
            seen.push(&entry.section);
        }
    }
    seen.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use partialgen_shared::{
        Definition, DefinitionStatus, FaqEntry, PageId, PartialgenError, Project, RichText,
    };

    /// In-memory content source for pipeline tests.
    struct StaticSource {
        project: Project,
        faqs: Vec<FaqEntry>,
        definitions: Vec<Definition>,
    }

    impl ContentSource for StaticSource {
        async fn find_project(&self, name: &str) -> Result<Project> {
            if name == self.project.name {
                Ok(self.project.clone())
            } else {
                Err(PartialgenError::Network(format!(
                    "no project named \"{name}\" in the workspace"
                )))
            }
        }

        async fn list_faqs(&self, _project_id: &str) -> Result<Vec<FaqEntry>> {
            Ok(self.faqs.clone())
        }

        async fn list_definitions(&self, _project_id: &str) -> Result<Vec<Definition>> {
            Ok(self.definitions.clone())
        }
    }

    fn definition(page_id: &str, term: &str, status: DefinitionStatus) -> Definition {
        Definition {
            page_id: PageId::from(page_id),
            status,
            term: vec![RichText::plain(term)],
            definition: vec![RichText::plain("Body text.")],
            url: format!("https://workspace.example.com/{page_id}"),
        }
    }

    fn faq(page_id: &str, section: &str, order: i64, question: &str) -> FaqEntry {
        FaqEntry {
            page_id: PageId::from(page_id),
            section: section.into(),
            order,
            question: question.into(),
            answer: vec![RichText::plain("An answer.")],
            blocks: vec![],
        }
    }

    fn static_source() -> StaticSource {
        StaticSource {
            project: Project {
                id: "prj_1".into(),
                name: "governance-docs".into(),
                glossary_path: "/glossary".into(),
            },
            faqs: vec![
                faq("pg_f1", "Voting", 2, "Can I delegate?"),
                faq("pg_f2", "Voting", 1, "How do I vote?"),
                faq("pg_f3", "Rewards", 5, "When are rewards paid?"),
            ],
            definitions: vec![
                definition("pg_d1", "Quorum", DefinitionStatus::Published),
                definition("pg_d2", "Ballot", DefinitionStatus::Published),
                definition("pg_d3", "Treasury", DefinitionStatus::Draft),
            ],
        }
    }

    fn build_config() -> (BuildConfig, PathBuf) {
        let tmp = std::env::temp_dir().join(format!("pg-pipeline-test-{}", uuid::Uuid::now_v7()));
        let config = BuildConfig {
            project_name: "governance-docs".into(),
            output_dir: tmp.clone(),
            glossary_file: "glossary.md".into(),
            faq_file: "faq.md".into(),
        };
        (config, tmp)
    }

    #[tokio::test]
    async fn writes_both_partials() {
        let (config, tmp) = build_config();

        let result = build_partials(&config, &static_source(), &SilentProgress)
            .await
            .expect("build");

        assert!(result.glossary_path.exists());
        assert!(result.faq_path.exists());
        assert_eq!(result.definitions_published, 2);
        assert_eq!(result.definitions_skipped, 1);
        assert_eq!(result.faq_entries, 3);
        assert_eq!(result.faq_sections, 2);

        let glossary = std::fs::read_to_string(&result.glossary_path).unwrap();
        assert!(glossary.contains("### Ballot {#ballot}"));
        assert!(glossary.contains("### Quorum {#quorum}"));
        assert!(!glossary.contains("Treasury"));

        let faq = std::fs::read_to_string(&result.faq_path).unwrap();
        let voting = faq.find("### Voting").expect("Voting present");
        let rewards = faq.find("### Rewards").expect("Rewards present");
        assert!(voting < rewards);
        let first = faq.find("How do I vote?").expect("present");
        let second = faq.find("Can I delegate?").expect("present");
        assert!(first < second);

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[tokio::test]
    async fn rerun_reproduces_identical_bytes() {
        let (config, tmp) = build_config();
        let source = static_source();

        build_partials(&config, &source, &SilentProgress)
            .await
            .expect("first build");
        let glossary_1 = std::fs::read(tmp.join("glossary.md")).unwrap();
        let faq_1 = std::fs::read(tmp.join("faq.md")).unwrap();

        build_partials(&config, &source, &SilentProgress)
            .await
            .expect("second build");
        let glossary_2 = std::fs::read(tmp.join("glossary.md")).unwrap();
        let faq_2 = std::fs::read(tmp.join("faq.md")).unwrap();

        assert_eq!(glossary_1, glossary_2);
        assert_eq!(faq_1, faq_2);

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[tokio::test]
    async fn draft_definition_mentioned_from_faq_renders_unlinked() {
        let (config, tmp) = build_config();
        let mut source = static_source();
        source.faqs = vec![FaqEntry {
            page_id: PageId::from("pg_f1"),
            section: "Funds".into(),
            order: 1,
            question: "Where does funding come from?".into(),
            answer: vec![
                RichText::plain("From the "),
                RichText {
                    text: "treasury".into(),
                    mention: Some(PageId::from("pg_d3")),
                    ..RichText::default()
                },
                RichText::plain("."),
            ],
            blocks: vec![],
        }];

        let result = build_partials(&config, &source, &SilentProgress)
            .await
            .expect("build");

        let faq = std::fs::read_to_string(&result.faq_path).unwrap();
        assert!(faq.contains("From the treasury."));
        assert!(!faq.contains("](/glossary#treasury)"));

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[tokio::test]
    async fn missing_project_aborts_before_any_write() {
        let (mut config, tmp) = build_config();
        config.project_name = "absent".into();

        let err = build_partials(&config, &static_source(), &SilentProgress)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("absent"));
        assert!(!tmp.join("glossary.md").exists());
        assert!(!tmp.join("faq.md").exists());

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[tokio::test]
    async fn faq_cross_links_into_glossary() {
        let (config, tmp) = build_config();
        let mut source = static_source();
        source.faqs = vec![FaqEntry {
            page_id: PageId::from("pg_f1"),
            section: "Voting".into(),
            order: 1,
            question: "What counts toward passage?".into(),
            answer: vec![
                RichText::plain("Votes count toward the "),
                RichText {
                    text: "quorum".into(),
                    mention: Some(PageId::from("pg_d1")),
                    ..RichText::default()
                },
                RichText::plain("."),
            ],
            blocks: vec![],
        }];

        let result = build_partials(&config, &source, &SilentProgress)
            .await
            .expect("build");

        let faq = std::fs::read_to_string(&result.faq_path).unwrap();
        assert!(faq.contains("[quorum](/glossary#quorum)"));

        let _ = std::fs::remove_dir_all(&tmp);
    }
}

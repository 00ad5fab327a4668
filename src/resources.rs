//! Immutable linguistic resources shared by every analysis component.
//!
//! Loaded once, then handed around as `Arc<Resources>`. Lexicons are
//! bundled into the binary via `include_str!`; the `[resources]` config
//! section can point at replacement files.

use std::borrow::Cow;
use std::path::Path;

use crate::config::AnalyzerConfig;
use crate::emotion::EmotionLexicon;
use crate::error::{ResourceError, ResourceResult};
use crate::sentiment::{LexiconScorer, SubjectivityEstimator, SubjectivityLexicon};
use crate::text::{PosTagger, RuleSegmenter, TextSegmenter};

const SUBJECTIVITY_TOML: &str = include_str!("../data/lexicon/subjectivity.toml");
const EMOTIONS_TOML: &str = include_str!("../data/lexicon/emotions.toml");

/// Everything the analyzers read but never write.
pub struct Resources {
    segmenter: Box<dyn TextSegmenter>,
    scorer: LexiconScorer,
    estimator: SubjectivityEstimator,
    emotions: EmotionLexicon,
}

impl Resources {
    /// Load resources as described by `config`.
    pub fn load(config: &AnalyzerConfig) -> ResourceResult<Self> {
        let subjectivity_src = read_resource(
            config.resources.subjectivity_lexicon.as_deref(),
            SUBJECTIVITY_TOML,
        )?;
        let emotions_src =
            read_resource(config.resources.emotion_lexicon.as_deref(), EMOTIONS_TOML)?;

        let subjectivity = SubjectivityLexicon::parse(&subjectivity_src)?;
        let emotions = EmotionLexicon::parse(&emotions_src)?;

        let tagger = PosTagger::with_hints(subjectivity.tagger_hints());
        tracing::debug!(
            lexicon = %subjectivity.meta.name,
            version = %subjectivity.meta.version,
            words = subjectivity.words.len(),
            hints = tagger.hint_count(),
            split_clauses = config.segmenter.split_clauses,
            "loaded linguistic resources"
        );

        Ok(Self {
            segmenter: Box::new(RuleSegmenter::new(tagger, config.segmenter.split_clauses)),
            scorer: LexiconScorer::new(),
            estimator: SubjectivityEstimator::new(&subjectivity),
            emotions,
        })
    }

    /// Bundled lexicons with default settings.
    pub fn bundled() -> ResourceResult<Self> {
        Self::load(&AnalyzerConfig::default())
    }

    /// Replace the segmentation capability.
    pub fn with_segmenter(mut self, segmenter: impl TextSegmenter + 'static) -> Self {
        self.segmenter = Box::new(segmenter);
        self
    }

    pub fn segmenter(&self) -> &dyn TextSegmenter {
        self.segmenter.as_ref()
    }

    pub fn scorer(&self) -> &LexiconScorer {
        &self.scorer
    }

    pub fn estimator(&self) -> &SubjectivityEstimator {
        &self.estimator
    }

    pub fn emotion_lexicon(&self) -> &EmotionLexicon {
        &self.emotions
    }
}

impl std::fmt::Debug for Resources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resources")
            .field("estimator", &self.estimator)
            .field("emotions", &self.emotions)
            .finish_non_exhaustive()
    }
}

fn read_resource(path: Option<&Path>, bundled: &'static str) -> ResourceResult<Cow<'static, str>> {
    match path {
        None => Ok(Cow::Borrowed(bundled)),
        Some(path) => std::fs::read_to_string(path)
            .map(Cow::Owned)
            .map_err(|e| ResourceError::Unavailable {
                path: path.display().to_string(),
                source: e,
            }),
    }
}

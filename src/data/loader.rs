use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::Question;

/// Failure while reading a question file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{0} must contain at least one question")]
    Empty(PathBuf),
}

/// Load questions from a JSON array on disk.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let questions: Vec<Question> =
        serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    if questions.is_empty() {
        return Err(LoadError::Empty(path.to_path_buf()));
    }

    tracing::info!(path = %path.display(), count = questions.len(), "loaded questions");
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::models::Subject;

    #[test]
    fn test_load_questions_from_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{
                "id": "q1",
                "subject": "physics",
                "difficulty": "basic",
                "text": "Unit of force?",
                "options": ["Joule", "Newton", "Watt", "Pascal"],
                "correct_answer": 1,
                "explanation": "Force is measured in newtons.",
                "xp_reward": 50
            }}]"#
        )
        .unwrap();

        let questions = load_questions_from_json(file.path()).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].subject, Subject::Physics);
        assert_eq!(questions[0].coin_reward, 0);
        assert!(questions[0].hint.is_none());
    }

    #[test]
    fn test_empty_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();

        let err = load_questions_from_json(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Empty(_)));
    }

    #[test]
    fn test_missing_file_reports_io() {
        let err = load_questions_from_json("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}

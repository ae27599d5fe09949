//! Cosmetic preview of a snippet's template.
//!
//! This is a fixed list of regex substitutions over one extracted block, not
//! a parser. Anything it cannot find is reported as a visible fallback inside
//! the preview rather than as an error. The produced document carries a
//! content security policy that forbids scripts, so it stays inert wherever
//! it is shown.

use regex::Regex;

use crate::models::Framework;

use super::{SnippetError, angular, vue};

/// One ordered substitution applied to the extracted template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rewrite {
    pub pattern: &'static str,
    pub replacement: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    Rendered { fragment: String, document: String },
    NotFound { message: String, document: String },
}

impl Preview {
    pub fn document(&self) -> &str {
        match self {
            Preview::Rendered { document, .. } | Preview::NotFound { document, .. } => document,
        }
    }

    pub fn is_rendered(&self) -> bool {
        matches!(self, Preview::Rendered { .. })
    }
}

enum Extractor {
    Vue {
        template: Regex,
        script: Regex,
        definition: Regex,
    },
    Angular {
        template: Regex,
    },
}

pub struct Previewer {
    framework: Framework,
    extractor: Extractor,
    rewrites: Vec<(Regex, &'static str)>,
}

impl Previewer {
    pub fn new(framework: Framework) -> Result<Self, SnippetError> {
        let (extractor, rules) = match framework {
            Framework::Vue => (
                Extractor::Vue {
                    template: compile(vue::TEMPLATE_BLOCK)?,
                    script: compile(vue::SCRIPT_BLOCK)?,
                    definition: compile(vue::COMPONENT_DEFINITION)?,
                },
                vue::REWRITES,
            ),
            Framework::Angular => (
                Extractor::Angular {
                    template: compile(angular::TEMPLATE_LITERAL)?,
                },
                angular::REWRITES,
            ),
        };

        let rewrites = rules
            .iter()
            .map(|rule| Ok((compile(rule.pattern)?, rule.replacement)))
            .collect::<Result<Vec<_>, SnippetError>>()?;

        Ok(Self {
            framework,
            extractor,
            rewrites,
        })
    }

    pub fn framework(&self) -> Framework {
        self.framework
    }

    pub fn render(&self, code: &str) -> Preview {
        match self.extract(code) {
            Ok(template) => {
                let fragment = self.highlight(&template);
                let body = format!(
                    "<div class=\"preview\">\n<h3>{} Component Template:</h3>\n{}\n</div>",
                    self.framework, fragment
                );
                Preview::Rendered {
                    document: self.document(&body),
                    fragment,
                }
            }
            Err(message) => {
                tracing::debug!(framework = %self.framework, reason = message, "preview fallback");
                let body = format!("<div class=\"error\">{}</div>", message);
                Preview::NotFound {
                    document: self.document(&body),
                    message: message.to_string(),
                }
            }
        }
    }

    /// Apply the substitutions in order.
    pub fn highlight(&self, template: &str) -> String {
        self.rewrites
            .iter()
            .fold(template.to_string(), |text, (pattern, replacement)| {
                pattern.replace_all(&text, *replacement).into_owned()
            })
    }

    fn extract(&self, code: &str) -> Result<String, &'static str> {
        match &self.extractor {
            Extractor::Vue {
                template,
                script,
                definition,
            } => {
                let (Some(template), Some(script)) = (template.captures(code), script.captures(code))
                else {
                    return Err("Template or script section not found");
                };
                let script = script.get(1).map_or("", |m| m.as_str()).trim();
                if !definition.is_match(script) {
                    return Err("Invalid component structure");
                }
                Ok(template.get(1).map_or("", |m| m.as_str()).trim().to_string())
            }
            Extractor::Angular { template } => template
                .captures(code)
                .and_then(|c| c.get(1))
                .map(|m| m.as_str().to_string())
                .ok_or("No template found in component"),
        }
    }

    fn document(&self, body: &str) -> String {
        format!(
            "<!DOCTYPE html>\n\
             <html>\n\
             <head>\n\
             <meta charset=\"utf-8\">\n\
             <meta http-equiv=\"Content-Security-Policy\" content=\"default-src 'none'; style-src 'unsafe-inline'\">\n\
             <title>{} Preview</title>\n\
             <style>body {{ margin: 0; padding: 20px; font-family: sans-serif; }} \
             .error {{ color: red; padding: 10px; background: #fee; border: 1px solid #fcc; }}</style>\n\
             </head>\n\
             <body>\n\
             <div id=\"root\">\n{}\n</div>\n\
             </body>\n\
             </html>\n",
            self.framework, body
        )
    }
}

fn compile(pattern: &'static str) -> Result<Regex, SnippetError> {
    Regex::new(pattern).map_err(|source| SnippetError::Pattern { pattern, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vue_starter_renders() {
        let previewer = Previewer::new(Framework::Vue).unwrap();
        let preview = previewer.render(vue::STARTER);

        let Preview::Rendered { fragment, document } = preview else {
            panic!("starter should render");
        };
        assert!(fragment.starts_with("<div class=\"p-4\">"));
        assert!(fragment.contains(r#"<span class="text-green-600 font-mono">{{ count  }}</span>"#));
        assert!(fragment.contains(r#"class="bg-yellow-100 px-2 py-1 rounded""#));
        assert!(!fragment.contains("v-for="));
        assert!(!fragment.contains("@click="));
        assert!(document.contains("Vue Component Template:"));
        assert!(document.contains("default-src 'none'"));
        assert!(!document.contains("<script"));
    }

    #[test]
    fn test_vue_without_script_falls_back() {
        let previewer = Previewer::new(Framework::Vue).unwrap();
        let preview = previewer.render("<template><p>hi</p></template>");
        assert_eq!(
            preview,
            Preview::NotFound {
                message: "Template or script section not found".to_string(),
                document: preview.document().to_string(),
            }
        );
        assert!(preview.document().contains("Template or script section not found"));
    }

    #[test]
    fn test_vue_without_export_default_is_invalid() {
        let previewer = Previewer::new(Framework::Vue).unwrap();
        let preview = previewer.render("<template><p>hi</p></template><script>let x = 1;</script>");
        assert!(matches!(
            preview,
            Preview::NotFound { ref message, .. } if message == "Invalid component structure"
        ));
    }

    #[test]
    fn test_angular_starter_renders() {
        let previewer = Previewer::new(Framework::Angular).unwrap();
        let preview = previewer.render(angular::STARTER);

        let Preview::Rendered { fragment, .. } = preview else {
            panic!("starter should render");
        };
        assert!(fragment.contains("text-blue-600"));
        assert!(fragment.contains(r#"data-event="click" class="cursor-pointer""#));
        assert!(!fragment.contains("*ngFor"));
        assert!(!fragment.contains(":host"));
    }

    #[test]
    fn test_angular_without_template_falls_back() {
        let previewer = Previewer::new(Framework::Angular).unwrap();
        let preview = previewer.render("export class Empty {}");
        assert!(!preview.is_rendered());
        assert!(preview.document().contains("No template found in component"));
    }

    #[test]
    fn test_rewrites_apply_in_order() {
        let previewer = Previewer::new(Framework::Angular).unwrap();
        let out = previewer.highlight(r#"<li *ngIf="ok">{{x}}</li>"#);
        assert_eq!(
            out,
            r#"<li class="bg-green-100 px-2 py-1 rounded"><span class="text-blue-600 font-mono">{{ x }}</span></li>"#
        );
    }
}

//! Builtin document templates.

use crate::markup::strip_tags;
use crate::{Block, DocError, Result, Template};

/// The read-only template gallery.
#[derive(Clone, Debug)]
pub struct TemplateCatalog {
    templates: Vec<Template>,
}

impl TemplateCatalog {
    /// The six templates shipped with the editor, in gallery order.
    pub fn builtin() -> Self {
        let templates = vec![
            Template::new(
                "blank",
                "Blank Document",
                "Start with a clean slate",
                "<h1>My Document</h1><p>Start typing here...</p>",
            ),
            Template::new(
                "ebook",
                "E-book",
                "Professional e-book layout with chapters",
                "<h1>My E-book Title</h1><h2>Subtitle</h2><p>Chapter 1: Introduction</p><p>This e-book will guide you through...</p>",
            ),
            Template::new(
                "report",
                "Market Report",
                "Data-driven market analysis report",
                "<h1>Market Analysis Report</h1><h2>Executive Summary</h2><p>This report analyzes the current trends in...</p>",
            ),
            Template::new(
                "checklist",
                "Checklist",
                "Interactive checklist for processes",
                "<h1>My Checklist</h1><ul><li>Item 1</li><li>Item 2</li><li>Item 3</li></ul>",
            ),
            Template::new(
                "guide",
                "How-to Guide",
                "Step-by-step instructional guide",
                "<h1>Complete Guide</h1><h2>Introduction</h2><p>This guide will help you to...</p>",
            ),
            Template::new(
                "lead-magnet",
                "Lead Magnet",
                "Optimized for lead generation",
                "<h1>5 Essential Tips for Success</h1><p>Discover the secrets that experts use to...</p>",
            ),
        ];
        Self { templates }
    }

    /// A catalog over caller-supplied templates.
    pub fn from_templates(templates: Vec<Template>) -> Self {
        Self { templates }
    }

    pub fn all(&self) -> &[Template] {
        &self.templates
    }

    pub fn get(&self, id: &str) -> Result<&Template> {
        self.templates
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| DocError::UnknownTemplate(id.to_string()))
    }

    /// The gallery's preselected entry.
    pub fn default_template(&self) -> Option<&Template> {
        self.templates.first()
    }
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// The two-block sequence a template starts from: a heading carrying the
/// template name, then one paragraph with the seed markup's tags stripped.
pub fn initial_blocks(template: &Template) -> Result<Vec<Block>> {
    Ok(vec![
        Block::heading(template.name.clone()),
        Block::paragraph(strip_tags(&template.seed_markup)?),
    ])
}

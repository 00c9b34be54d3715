//! Named-section excision for the bundled configuration template.
//!
//! The template contains comment lines acting as section boundaries. A
//! section is removed by cutting from its start marker up to (but not
//! including) the marker where normal content resumes. If either marker is
//! missing the content passes through unmodified — templates edited to drop
//! a section keep working, they just lose the excision.

/// A named removable section, bounded by two comment markers.
#[derive(Debug, Clone, Copy)]
pub struct SectionMarkers {
    /// Line introducing the section (including its leading newline).
    pub start: &'static str,
    /// Line at which regular content resumes (kept in the output).
    pub resume: &'static str,
}

/// The JS/TS-specific hook block, removed when no package manifest exists.
pub const JS_SECTION: SectionMarkers = SectionMarkers {
    start: "\n  # JavaScript/TypeScript specific hooks",
    resume: "\n  # Branch naming convention",
};

/// Remove a marked section, keeping the resume marker and everything after.
///
/// Returns the content unchanged when either marker is absent.
pub fn strip_section(content: &str, markers: &SectionMarkers) -> String {
    let Some(start) = content.find(markers.start) else {
        return content.to_string();
    };

    let Some(resume_offset) = content[start..].find(markers.resume) else {
        return content.to_string();
    };

    let mut result = String::with_capacity(content.len());
    result.push_str(&content[..start]);
    result.push_str(&content[start + resume_offset..]);
    result
}

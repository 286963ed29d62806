// Navigation label -> section selector. Checked in order; first hit wins.
const NAV_TARGETS: [(&str, &str); 4] = [
    ("Bios", ".bottom-content"),
    ("Portfolio", ".content-boxes"),
    ("Team", ".subheading"),
    ("Our Approach", ".hero-content"),
];

/// Selector of the section a nav item scrolls to, matched by substring.
pub fn section_for_label(label: &str) -> Option<&'static str> {
    let label = label.trim();
    NAV_TARGETS
        .iter()
        .find(|(needle, _)| label.contains(needle))
        .map(|(_, selector)| *selector)
}

//! Layout templates: wrapping page content with a shared document
//! structure (header, navigation, footer).

use whtml::tags::div;
use whtml::Tag;

/// A layout wraps one content node into a complete page tree, which
/// then goes through the normal render path.
pub trait Layout {
    fn render(&self, content: Tag) -> Tag;

    /// Wrap multiple content nodes in a `div` container first.
    fn render_contents(&self, contents: Vec<Tag>) -> Tag {
        self.render(div(contents))
    }
}

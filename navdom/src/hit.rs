use crate::element::{Content, Element};
use crate::region::RegionMap;

/// Deepest clickable element under the given point, or None.
///
/// Descent stops at elements the host never placed, so an unplaced subtree
/// can't be hit. Among overlapping siblings the later one wins, since it
/// draws over the earlier ones.
pub fn hit_test(regions: &RegionMap, root: &Element, x: u16, y: u16) -> Option<String> {
    if !regions.get(&root.id)?.contains(x, y) {
        return None;
    }

    let children = match &root.content {
        Content::Children(children) => children.as_slice(),
        _ => &[],
    };

    children
        .iter()
        .rev()
        .find_map(|child| hit_test(regions, child, x, y))
        .or_else(|| root.clickable.then(|| root.id.clone()))
}

use crate::reference::ImageReference;
use crate::report::knowledge::compare_fixture;

/// Renders the differences between two images' exposed ports and environment
/// variables, working from the fixture tables rather than live data.
pub fn image_comparison(left: &ImageReference, right: &ImageReference) -> String {
    let left_name = format!("{}:{}", left.repository_path(), left.tag);
    let right_name = format!("{}:{}", right.repository_path(), right.tag);
    let left_fixture = compare_fixture(&left.repository);
    let right_fixture = compare_fixture(&right.repository);

    let mut out = format!("# Image Comparison: {left_name} vs {right_name}\n\n");

    out.push_str("## Exposed Ports\n\n");
    push_diff(
        &mut out,
        &right_name,
        &left_name,
        diff(right_fixture.ports, left_fixture.ports),
        diff(left_fixture.ports, right_fixture.ports),
    );

    out.push_str("## Environment Variables\n\n");
    push_diff(
        &mut out,
        &right_name,
        &left_name,
        diff(right_fixture.env, left_fixture.env),
        diff(left_fixture.env, right_fixture.env),
    );

    out
}

/// Items present in `from` but not in `against`, keeping `from` order.
fn diff<'a>(from: &[&'a str], against: &[&str]) -> Vec<&'a str> {
    from.iter()
        .filter(|item| !against.contains(item))
        .copied()
        .collect()
}

fn push_diff(out: &mut String, added_in: &str, removed_from: &str, added: Vec<&str>, removed: Vec<&str>) {
    if added.is_empty() && removed.is_empty() {
        out.push_str("No differences.\n\n");
        return;
    }

    if !added.is_empty() {
        out.push_str(&format!("### Added in {added_in}\n\n"));
        for item in added {
            out.push_str(&format!("- {item}\n"));
        }
        out.push('\n');
    }

    if !removed.is_empty() {
        out.push_str(&format!("### Removed from {removed_from}\n\n"));
        for item in removed {
            out.push_str(&format!("- {item}\n"));
        }
        out.push('\n');
    }
}

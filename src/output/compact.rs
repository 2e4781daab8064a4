//! Compact layout: structure only, no file contents

use crate::tree::TreeNode;

use super::{child_prefix, connector, node_label};

/// Formatter for the compact layout, a pure structural diagram used for
/// quick overviews.
pub struct CompactFormatter;

impl CompactFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format(&self, root: &TreeNode) -> String {
        let mut output = String::new();
        let (dir_count, file_count) = self.format_node(root, &mut output, "", true, true);
        output.push_str(&format!(
            "\n{} directories, {} files\n",
            dir_count, file_count
        ));
        output
    }

    fn format_node(
        &self,
        node: &TreeNode,
        output: &mut String,
        prefix: &str,
        is_last: bool,
        is_root: bool,
    ) -> (usize, usize) {
        if is_root {
            output.push_str(&node_label(node));
            output.push('\n');
        } else {
            output.push_str(prefix);
            output.push_str(connector(is_last));
            output.push_str(&node_label(node));
            output.push('\n');
        }

        if !node.is_dir() {
            return (0, 1);
        }

        let new_prefix = if is_root {
            String::new()
        } else {
            child_prefix(prefix, is_last)
        };

        let children = node.children();
        let mut dir_count = 0;
        let mut file_count = 0;
        for (i, child) in children.iter().enumerate() {
            let child_is_last = i == children.len() - 1;
            let (d, f) = self.format_node(child, output, &new_prefix, child_is_last, false);
            dir_count += d;
            file_count += f;
            if child.is_dir() {
                dir_count += 1;
            }
        }

        (dir_count, file_count)
    }
}

impl Default for CompactFormatter {
    fn default() -> Self {
        Self::new()
    }
}

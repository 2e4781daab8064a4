//! Detailed layout: tree diagram with per-file content blocks

use crate::config::GenerateConfig;
use crate::content::render_content;
use crate::tree::TreeNode;

use super::{BINARY_PLACEHOLDER, child_prefix, connector, node_label};

/// Formatter for the detailed layout.
///
/// Content is rendered lazily per file while formatting, so the walker
/// never holds more than one file's content in memory at a time.
pub struct DetailedFormatter<'a> {
    config: &'a GenerateConfig,
    warnings: Vec<String>,
}

impl<'a> DetailedFormatter<'a> {
    pub fn new(config: &'a GenerateConfig) -> Self {
        Self {
            config,
            warnings: Vec::new(),
        }
    }

    pub fn format(mut self, root: &TreeNode) -> (String, Vec<String>) {
        let mut output = String::new();
        let (dir_count, file_count) = self.format_node(root, &mut output, "", true, true);
        output.push_str(&format!(
            "\n{} directories, {} files\n",
            dir_count, file_count
        ));
        (output, self.warnings)
    }

    fn format_node(
        &mut self,
        node: &TreeNode,
        output: &mut String,
        prefix: &str,
        is_last: bool,
        is_root: bool,
    ) -> (usize, usize) {
        match node {
            TreeNode::File { name, path } => {
                output.push_str(prefix);
                output.push_str(connector(is_last));
                output.push_str(name);
                output.push('\n');

                let rendered = render_content(
                    path,
                    self.config.max_lines_per_file,
                    self.config.max_line_length,
                );
                if let Some(kind) = &rendered.read_error {
                    self.warnings
                        .push(format!("cannot read file {}: {}", path.display(), kind));
                }

                let cont = child_prefix(prefix, is_last);
                if rendered.is_binary {
                    output.push_str(&cont);
                    output.push_str("  ");
                    output.push_str(BINARY_PLACEHOLDER);
                    output.push('\n');
                } else {
                    for (number, text) in &rendered.lines {
                        output.push_str(&cont);
                        output.push_str("  ");
                        output.push_str(&number.to_string());
                        output.push(':');
                        // No trailing space on blank source lines.
                        if !text.is_empty() {
                            output.push(' ');
                            output.push_str(text);
                        }
                        output.push('\n');
                    }
                    if rendered.truncated_lines > 0 {
                        output.push_str(&cont);
                        output.push_str(&format!(
                            "  ... {} more lines truncated\n",
                            rendered.truncated_lines
                        ));
                    }
                }
                (0, 1)
            }
            TreeNode::Dir { children, .. } => {
                if is_root {
                    output.push_str(&node_label(node));
                    output.push('\n');
                } else {
                    output.push_str(prefix);
                    output.push_str(connector(is_last));
                    output.push_str(&node_label(node));
                    output.push('\n');
                }

                let new_prefix = if is_root {
                    String::new()
                } else {
                    child_prefix(prefix, is_last)
                };

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
    }
}

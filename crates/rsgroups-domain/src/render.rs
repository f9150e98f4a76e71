//! Nested-list rendering of group trees.

use std::future::Future;
use std::pin::Pin;

use crate::error::DomainResult;
use crate::model::GroupTree;
use crate::resolver::GroupReader;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Renders a forest snapshot as nested list markup.
///
/// Each node renders its display name resolved through `reader`, followed
/// by a nested list of its children when any exist, in the tree's stored
/// insertion order. A node whose name lookup finds nothing still renders
/// its structural wrapper. Storage failures propagate unchanged.
pub async fn render_group_tree<R>(tree: &GroupTree, reader: &R) -> DomainResult<String>
where
    R: GroupReader,
{
    let mut output = String::new();
    render_level(tree, reader, &mut output).await?;
    Ok(output)
}

fn render_level<'a, R>(
    tree: &'a GroupTree,
    reader: &'a R,
    output: &'a mut String,
) -> BoxFuture<'a, DomainResult<()>>
where
    R: GroupReader,
{
    Box::pin(async move {
        output.push_str("<ul style=\"padding-left:1em\">");
        for node in tree {
            output.push_str("<li>");
            if let Some(name) = reader.group_display_name(node.id()).await? {
                output.push_str(&name);
            }
            if !node.children().is_empty() {
                render_level(node.children(), reader, output).await?;
            }
            output.push_str("</li>");
        }
        output.push_str("</ul>");
        Ok(())
    })
}

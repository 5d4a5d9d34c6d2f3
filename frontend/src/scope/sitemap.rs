use serde::Serialize;

use super::answers::AnswerMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum NodeKind {
    Root,
    Static,
    Dynamic,
    Commerce,
}

impl NodeKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NodeKind::Root => "node-root",
            NodeKind::Static => "node-static",
            NodeKind::Dynamic => "node-dynamic",
            NodeKind::Commerce => "node-commerce",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SitemapNode {
    pub label: String,
    pub kind: NodeKind,
}

impl SitemapNode {
    fn new(label: &str, kind: NodeKind) -> Self {
        Self { label: label.to_string(), kind }
    }
}

/// Node order is the left-to-right order of the rendered diagram.
pub fn derive_sitemap(answers: &AnswerMap) -> Vec<SitemapNode> {
    let mut nodes = vec![SitemapNode::new("Home", NodeKind::Root)];

    if answers.mentions("size", "One Page") {
        nodes.push(SitemapNode::new("Sections", NodeKind::Static));
    } else {
        nodes.push(SitemapNode::new("About", NodeKind::Static));
        nodes.push(SitemapNode::new("Contact", NodeKind::Static));
    }

    if answers.mentions_ignore_case("content", "project") {
        nodes.push(SitemapNode::new("Case Studies", NodeKind::Dynamic));
    }
    if answers.mentions_ignore_case("content", "blog") {
        nodes.push(SitemapNode::new("Journal", NodeKind::Dynamic));
    }
    if answers.mentions("engine", "Sell") {
        nodes.push(SitemapNode::new("Shop", NodeKind::Commerce));
        nodes.push(SitemapNode::new("Cart", NodeKind::Commerce));
    }

    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scope::answers::Answer;

    fn node(label: &str, kind: NodeKind) -> SitemapNode {
        SitemapNode::new(label, kind)
    }

    #[test]
    fn no_answers_give_the_default_structure() {
        assert_eq!(
            derive_sitemap(&AnswerMap::new()),
            vec![
                node("Home", NodeKind::Root),
                node("About", NodeKind::Static),
                node("Contact", NodeKind::Static),
            ]
        );
    }

    #[test]
    fn one_pager_collapses_into_sections() {
        let answers = AnswerMap::from([("size", Answer::Single("One Page (Landing)".into()))]);
        assert_eq!(
            derive_sitemap(&answers),
            vec![node("Home", NodeKind::Root), node("Sections", NodeKind::Static)]
        );
    }

    #[test]
    fn selling_appends_shop_and_cart_after_base_nodes() {
        let answers = AnswerMap::from([("engine", Answer::Single("Sell Products (E-comm)".into()))]);
        let nodes = derive_sitemap(&answers);
        assert_eq!(
            &nodes[3..],
            &[node("Shop", NodeKind::Commerce), node("Cart", NodeKind::Commerce)]
        );
    }

    #[test]
    fn dynamic_nodes_keep_fixed_order_regardless_of_selection_order() {
        let answers = AnswerMap::from([
            ("size", Answer::Single("Standard (5-15 pages)".into())),
            (
                "content",
                Answer::Multi(vec!["Blog / News".into(), "Projects / Portfolio".into()]),
            ),
            ("engine", Answer::Single("Sell Products (E-comm)".into())),
        ]);
        let labels: Vec<_> = derive_sitemap(&answers).into_iter().map(|n| n.label).collect();
        assert_eq!(
            labels,
            ["Home", "About", "Contact", "Case Studies", "Journal", "Shop", "Cart"]
        );
    }

    #[test]
    fn root_is_always_first() {
        let answers = AnswerMap::from([("content", Answer::Multi(vec!["Blog / News".into()]))]);
        assert_eq!(derive_sitemap(&answers)[0].kind, NodeKind::Root);
    }
}

/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! Item labels. The list only ever asks a label to turn itself into styled runs, via
//! [`Label::to_styled_fragments`], so any type implementing [`Label`] can be used.
//!
//! Two labels ship with the crate:
//! 1. [`PlainText`] renders its text with the base style.
//! 2. [`MarkupText`] understands a tiny HTML like markup, eg: `<blue>Bacon</blue>`.
//!    Each enclosing element adds the style class `class:<name>` to the text inside it,
//!    outer elements first. The entities `&lt;`, `&gt;` and `&amp;` are decoded.
//!    Source that does not parse (unclosed or mismatched tags) is rendered verbatim.

use std::fmt::Debug;

use nom::{IResult, Parser,
          branch::alt,
          bytes::complete::{tag, take_till1, take_while1},
          character::complete::char,
          combinator::{all_consuming, map},
          error::{Error, ErrorKind},
          multi::many0,
          sequence::delimited};
use smallvec::{SmallVec, smallvec};

use crate::{StyledFragment, StyledFragments, fragments_to_text, merge_styles};

pub trait Label: Debug {
    /// Render this label as styled runs, using `base_style` as the style of text that
    /// carries no markup of its own.
    fn to_styled_fragments(&self, base_style: &str) -> StyledFragments;

    /// The text of this label with all styling removed. Used for type-ahead matching.
    fn plain_text(&self) -> String { fragments_to_text(&self.to_styled_fragments("")) }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainText(pub String);

impl PlainText {
    pub fn new(text: impl Into<String>) -> Self { Self(text.into()) }
}

impl From<&str> for PlainText {
    fn from(text: &str) -> Self { Self::new(text) }
}

impl Label for PlainText {
    fn to_styled_fragments(&self, base_style: &str) -> StyledFragments {
        vec![StyledFragment::new(base_style, self.0.as_str())]
    }

    fn plain_text(&self) -> String { self.0.clone() }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupRun {
    /// Names of the enclosing elements, outermost first.
    pub classes: Vec<String>,
    pub text: String,
}

/// Label parsed once at construction. When parsing fails `runs` is [None] and the
/// source is shown as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupText {
    pub source: String,
    pub runs: Option<Vec<MarkupRun>>,
}

impl MarkupText {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let runs = parse_markup(&source);
        if runs.is_none() {
            tracing::warn!(message = "Malformed markup, rendering verbatim", source = %source);
        }
        Self { source, runs }
    }

    #[must_use]
    pub fn is_well_formed(&self) -> bool { self.runs.is_some() }
}

impl Label for MarkupText {
    fn to_styled_fragments(&self, base_style: &str) -> StyledFragments {
        let Some(runs) = &self.runs else {
            return vec![StyledFragment::new(base_style, self.source.as_str())];
        };

        runs.iter()
            .map(|run| {
                let classes = run
                    .classes
                    .iter()
                    .map(|name| format!("class:{name}"))
                    .collect::<Vec<_>>()
                    .join(" ");
                StyledFragment::new(merge_styles(base_style, &classes), run.text.as_str())
            })
            .collect()
    }
}

/// Names of the elements enclosing the current node. Markup is rarely nested deeply.
type ElementStack<'a> = SmallVec<[&'a str; 4]>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum MarkupNode<'a> {
    Text(&'a str),
    Element {
        name: &'a str,
        children: Vec<MarkupNode<'a>>,
    },
}

/// Elements nested deeper than this make the whole label malformed.
pub const MAX_MARKUP_DEPTH: usize = 32;

/// Parse `source` into flat runs. Returns [None] if the whole input isn't well formed,
/// or if elements are nested deeper than [`MAX_MARKUP_DEPTH`].
#[must_use]
pub fn parse_markup(source: &str) -> Option<Vec<MarkupRun>> {
    let (_, nodes) = all_consuming(|it| parse_nodes(it, 0)).parse(source).ok()?;
    let mut acc = vec![];
    flatten_nodes(&nodes, &mut smallvec![], &mut acc);
    Some(acc)
}

fn flatten_nodes<'a>(
    nodes: &[MarkupNode<'a>],
    classes: &mut ElementStack<'a>,
    acc: &mut Vec<MarkupRun>,
) {
    for node in nodes {
        match node {
            MarkupNode::Text(text) => acc.push(MarkupRun {
                classes: classes.iter().map(ToString::to_string).collect(),
                text: decode_entities(text),
            }),
            MarkupNode::Element { name, children } => {
                classes.push(*name);
                flatten_nodes(children, classes, acc);
                classes.pop();
            }
        }
    }
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

fn parse_nodes(input: &str, depth: usize) -> IResult<&str, Vec<MarkupNode<'_>>> {
    many0(|it| parse_node(it, depth)).parse(input)
}

fn parse_node(input: &str, depth: usize) -> IResult<&str, MarkupNode<'_>> {
    alt((|it| parse_element(it, depth), parse_text)).parse(input)
}

fn parse_text(input: &str) -> IResult<&str, MarkupNode<'_>> {
    map(take_till1(|c: char| c == '<'), MarkupNode::Text).parse(input)
}

fn parse_tag_name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '-' || c == '_').parse(input)
}

/// `<name>` children `</name>`. The closing tag must repeat the opening name. `depth`
/// is the number of enclosing elements.
fn parse_element(input: &str, depth: usize) -> IResult<&str, MarkupNode<'_>> {
    let (input, name) = delimited(char('<'), parse_tag_name, char('>')).parse(input)?;
    if depth >= MAX_MARKUP_DEPTH {
        return Err(nom::Err::Failure(Error::new(input, ErrorKind::TooLarge)));
    }
    let (input, children) = parse_nodes(input, depth + 1)?;
    let (input, _) = delimited(tag("</"), tag(name), char('>')).parse(input)?;
    Ok((input, MarkupNode::Element { name, children }))
}

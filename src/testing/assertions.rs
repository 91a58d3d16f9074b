//! Fluent assertion API for parsed trees

use crate::ast::{
    plain_text, BlockQuote, BodyElement, BulletList, EnumType, EnumeratedList, Fragment, ListItem,
    Paragraph,
};

/// Create an assertion builder for a fragment.
pub fn assert_fragment(fragment: &Fragment) -> FragmentAssertion<'_> {
    FragmentAssertion { fragment }
}

pub struct FragmentAssertion<'a> {
    fragment: &'a Fragment,
}

impl<'a> FragmentAssertion<'a> {
    /// Assert the number of body elements.
    pub fn body_count(self, expected: usize) -> Self {
        let actual = self.fragment.body.len();
        assert_eq!(
            actual,
            expected,
            "expected {} body elements, found {}: [{}]",
            expected,
            actual,
            summarize(&self.fragment.body)
        );
        self
    }

    /// Assert the number of structure elements.
    pub fn structure_count(self, expected: usize) -> Self {
        let actual = self.fragment.structure.len();
        assert_eq!(
            actual, expected,
            "expected {} structure elements, found {}",
            expected, actual
        );
        self
    }

    /// Assert on one body element by index.
    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BodyElementAssertion<'a>),
    {
        assert!(
            index < self.fragment.body.len(),
            "body index {} out of bounds ({} elements)",
            index,
            self.fragment.body.len()
        );
        assertion(BodyElementAssertion {
            element: &self.fragment.body[index],
            context: format!("body[{}]", index),
        });
        self
    }
}

pub struct BodyElementAssertion<'a> {
    element: &'a BodyElement,
    context: String,
}

impl<'a> BodyElementAssertion<'a> {
    pub fn assert_paragraph(self) -> ParagraphAssertion<'a> {
        match self.element {
            BodyElement::Paragraph(paragraph) => ParagraphAssertion {
                paragraph,
                context: self.context,
            },
            other => panic!(
                "{}: expected Paragraph, found {}",
                self.context,
                other.node_type()
            ),
        }
    }

    pub fn assert_block_quote(self) -> BlockQuoteAssertion<'a> {
        match self.element {
            BodyElement::BlockQuote(quote) => BlockQuoteAssertion {
                quote,
                context: self.context,
            },
            other => panic!(
                "{}: expected BlockQuote, found {}",
                self.context,
                other.node_type()
            ),
        }
    }

    pub fn assert_bullet_list(self) -> BulletListAssertion<'a> {
        match self.element {
            BodyElement::BulletList(list) => BulletListAssertion {
                list,
                context: self.context,
            },
            other => panic!(
                "{}: expected BulletList, found {}",
                self.context,
                other.node_type()
            ),
        }
    }

    pub fn assert_enumerated_list(self) -> EnumeratedListAssertion<'a> {
        match self.element {
            BodyElement::EnumeratedList(list) => EnumeratedListAssertion {
                list,
                context: self.context,
            },
            other => panic!(
                "{}: expected EnumeratedList, found {}",
                self.context,
                other.node_type()
            ),
        }
    }

    /// Assert this element is an error whose message contains the needle.
    pub fn assert_error_containing(self, needle: &str) {
        match self.element {
            BodyElement::Error(error) => assert!(
                error.message.contains(needle),
                "{}: error message {:?} does not contain {:?}",
                self.context,
                error.message,
                needle
            ),
            other => panic!(
                "{}: expected Error, found {}",
                self.context,
                other.node_type()
            ),
        }
    }
}

pub struct ParagraphAssertion<'a> {
    paragraph: &'a Paragraph,
    context: String,
}

impl<'a> ParagraphAssertion<'a> {
    /// Assert the joined text content of the paragraph.
    pub fn text(self, expected: &str) -> Self {
        let actual = plain_text(&self.paragraph.text);
        assert_eq!(
            actual, expected,
            "{}: expected text {:?}, found {:?}",
            self.context, expected, actual
        );
        self
    }

    /// Assert the number of inline elements (one per source line today).
    pub fn line_count(self, expected: usize) -> Self {
        let actual = self.paragraph.text.len();
        assert_eq!(
            actual, expected,
            "{}: expected {} lines, found {}",
            self.context, expected, actual
        );
        self
    }
}

pub struct BlockQuoteAssertion<'a> {
    quote: &'a BlockQuote,
    context: String,
}

impl<'a> BlockQuoteAssertion<'a> {
    pub fn element_count(self, expected: usize) -> Self {
        let actual = self.quote.quote.len();
        assert_eq!(
            actual,
            expected,
            "{}: expected {} quoted elements, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize(&self.quote.quote)
        );
        self
    }

    pub fn element<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BodyElementAssertion<'a>),
    {
        assert!(
            index < self.quote.quote.len(),
            "{}: quoted element index {} out of bounds ({} elements)",
            self.context,
            index,
            self.quote.quote.len()
        );
        assertion(BodyElementAssertion {
            element: &self.quote.quote[index],
            context: format!("{}.quote[{}]", self.context, index),
        });
        self
    }

    /// Assert the attribution's joined text.
    pub fn attribution(self, expected: &str) -> Self {
        match &self.quote.attribution {
            Some(attribution) => {
                let actual = plain_text(attribution);
                assert_eq!(
                    actual, expected,
                    "{}: expected attribution {:?}, found {:?}",
                    self.context, expected, actual
                );
            }
            None => panic!("{}: expected an attribution, found none", self.context),
        }
        self
    }

    pub fn no_attribution(self) -> Self {
        assert!(
            self.quote.attribution.is_none(),
            "{}: expected no attribution",
            self.context
        );
        self
    }
}

pub struct BulletListAssertion<'a> {
    list: &'a BulletList,
    context: String,
}

impl<'a> BulletListAssertion<'a> {
    pub fn item_count(self, expected: usize) -> Self {
        let actual = self.list.items.len();
        assert_eq!(
            actual, expected,
            "{}: expected {} items, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ListItemAssertion<'a>),
    {
        assert!(
            index < self.list.items.len(),
            "{}: item index {} out of bounds ({} items)",
            self.context,
            index,
            self.list.items.len()
        );
        assertion(ListItemAssertion {
            item: &self.list.items[index],
            context: format!("{}.items[{}]", self.context, index),
        });
        self
    }
}

pub struct EnumeratedListAssertion<'a> {
    list: &'a EnumeratedList,
    context: String,
}

impl<'a> EnumeratedListAssertion<'a> {
    pub fn item_count(self, expected: usize) -> Self {
        let actual = self.list.items.len();
        assert_eq!(
            actual, expected,
            "{}: expected {} items, found {}",
            self.context, expected, actual
        );
        self
    }

    pub fn enum_type(self, expected: EnumType) -> Self {
        assert_eq!(
            self.list.enum_type, expected,
            "{}: expected {} numbering, found {}",
            self.context,
            expected.as_str(),
            self.list.enum_type.as_str()
        );
        self
    }

    /// Assert the literal marker punctuation pair.
    pub fn affixes(self, prefix: &str, suffix: &str) -> Self {
        assert_eq!(
            (self.list.prefix.as_str(), self.list.suffix.as_str()),
            (prefix, suffix),
            "{}: marker punctuation mismatch",
            self.context
        );
        self
    }

    pub fn first_index(self, expected: usize) -> Self {
        assert_eq!(
            self.list.first_index, expected,
            "{}: expected first index {}, found {}",
            self.context, expected, self.list.first_index
        );
        self
    }

    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ListItemAssertion<'a>),
    {
        assert!(
            index < self.list.items.len(),
            "{}: item index {} out of bounds ({} items)",
            self.context,
            index,
            self.list.items.len()
        );
        assertion(ListItemAssertion {
            item: &self.list.items[index],
            context: format!("{}.items[{}]", self.context, index),
        });
        self
    }
}

pub struct ListItemAssertion<'a> {
    item: &'a ListItem,
    context: String,
}

impl<'a> ListItemAssertion<'a> {
    pub fn element_count(self, expected: usize) -> Self {
        let actual = self.item.body.len();
        assert_eq!(
            actual,
            expected,
            "{}: expected {} elements, found {}: [{}]",
            self.context,
            expected,
            actual,
            summarize(&self.item.body)
        );
        self
    }

    pub fn empty(self) -> Self {
        assert!(
            self.item.body.is_empty(),
            "{}: expected an empty item body",
            self.context
        );
        self
    }

    pub fn element<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BodyElementAssertion<'a>),
    {
        assert!(
            index < self.item.body.len(),
            "{}: element index {} out of bounds ({} elements)",
            self.context,
            index,
            self.item.body.len()
        );
        assertion(BodyElementAssertion {
            element: &self.item.body[index],
            context: format!("{}.body[{}]", self.context, index),
        });
        self
    }
}

fn summarize(elements: &[BodyElement]) -> String {
    elements
        .iter()
        .map(BodyElement::node_type)
        .collect::<Vec<_>>()
        .join(", ")
}

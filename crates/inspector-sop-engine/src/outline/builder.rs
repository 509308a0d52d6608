use super::{
    classify::LineClass,
    types::{ListFlavor, OutlineNode, SECTION_HEADING_LEVEL},
};

#[derive(Debug)]
struct PendingList {
    flavor: ListFlavor,
    items: Vec<String>,
}

#[derive(Debug)]
struct OpenHeading {
    text: String,
    children: Vec<OutlineNode>,
}

/// Folds classified lines into an outline forest.
///
/// At most one of the paragraph buffer and the pending list holds content at
/// any time: a list item flushes the paragraph, and the first line of a new
/// paragraph flushes the list.
pub struct OutlineBuilder {
    heading: Option<OpenHeading>,
    list: Option<PendingList>,
    paragraph: Vec<String>,
    out: Vec<OutlineNode>,
}

impl OutlineBuilder {
    pub fn new() -> Self {
        Self {
            heading: None,
            list: None,
            paragraph: vec![],
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        match *c {
            LineClass::Blank => {
                self.flush_paragraph();
                self.flush_list();
            }
            LineClass::Heading { title } => {
                self.flush_list();
                self.flush_paragraph();
                self.open_heading(title);
            }
            LineClass::Item { marker, text } => {
                self.flush_paragraph();
                self.push_item(marker.flavor(), text);
            }
            LineClass::Text { text } => {
                if self.paragraph.is_empty() {
                    self.flush_list();
                }
                self.paragraph.push(text.to_owned());
            }
        }
    }

    pub fn finish(mut self) -> Vec<OutlineNode> {
        // EOF flush
        self.flush_paragraph();
        self.flush_list();
        self.close_heading();
        self.out
    }

    fn push_item(&mut self, flavor: ListFlavor, text: &str) {
        if let Some(list) = self.list.as_mut().filter(|l| l.flavor == flavor) {
            list.items.push(text.to_owned());
            return;
        }
        self.flush_list();
        self.list = Some(PendingList {
            flavor,
            items: vec![text.to_owned()],
        });
    }

    fn open_heading(&mut self, title: &str) {
        self.close_heading();
        self.heading = Some(OpenHeading {
            text: title.to_owned(),
            children: vec![],
        });
    }

    /// Headings always close onto forest root; they never nest.
    fn close_heading(&mut self) {
        if let Some(OpenHeading { text, children }) = self.heading.take() {
            self.out.push(OutlineNode::Heading {
                level: SECTION_HEADING_LEVEL,
                text,
                children,
            });
        }
    }

    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.paragraph).join(" ");
        self.attach(OutlineNode::Paragraph { text });
    }

    fn flush_list(&mut self) {
        if let Some(PendingList { flavor, items }) = self.list.take() {
            self.attach(OutlineNode::list(flavor, items));
        }
    }

    /// Appends to the open heading's children, or to forest root.
    fn attach(&mut self, node: OutlineNode) {
        match self.heading.as_mut() {
            Some(heading) => heading.children.push(node),
            None => self.out.push(node),
        }
    }
}

impl Default for OutlineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

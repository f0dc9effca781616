use log::{debug, trace};

use crate::parsing::sections::{SectionContext, mentions_band};

use super::{
    classify::LineClass,
    kinds::{HeadingSig, InlineCallout, ListItemSig, Milestone, SemanticTopic, TableRow},
    nesting::{FlatItem, build_tree},
    types::{
        Block, Callout, CalloutKind, Cell, Heading, HeadingStyle, List, ListKind, ListMode,
        ListNode, Paragraph, Table,
    },
};

/// Executive-summary lists up to this size render as a card grid.
pub const GRID_MAX_ITEMS: usize = 8;

/// The single open accumulator. Holding it in one enum means at most one
/// multi-line block is ever in progress.
#[derive(Debug, Default)]
enum OpenBlock {
    #[default]
    Idle,
    List {
        kind: ListKind,
        items: Vec<FlatItem>,
    },
    Table {
        rows: Vec<Vec<String>>,
    },
    Callout {
        kind: CalloutKind,
        children: Vec<Paragraph>,
    },
}

/// Phase 2 of block parsing: consumes classified lines in order and emits
/// finished [`Block`]s, applying section policy along the way.
pub struct BlockBuilder {
    general: bool,
    sections: SectionContext,
    open: OpenBlock,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new(general: bool) -> Self {
        Self {
            general,
            sections: SectionContext::new(general),
            open: OpenBlock::Idle,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: LineClass) {
        if let Some(chart) = c.chart {
            self.flush();
            self.out.push(Block::Chart(chart));
            return;
        }

        if let Some(cells) = c.table_row {
            self.flush_list();
            self.flush_callout();
            self.push_table_row(cells);
            return;
        }
        self.flush_table();

        // Checked before list items: milestones are usually written as bullets.
        if self.sections.is_action_plan()
            && let Some(title) = Milestone::parse(&c.text)
        {
            self.flush();
            self.out
                .push(Block::Heading(Heading::new(4, &title, HeadingStyle::Milestone)));
            return;
        }

        if let Some(item) = c.list_item {
            self.flush_callout();
            self.push_list_item(item);
            return;
        }
        self.flush_list();

        if let Some(heading) = c.heading {
            self.consume_heading(heading);
            return;
        }

        if c.is_rule {
            self.flush_callout();
            self.out.push(Block::Rule);
            return;
        }

        if c.is_blank {
            self.out.push(Block::Spacer);
            return;
        }

        if self.general {
            if let Some((kind, body)) = InlineCallout::parse(&c.text) {
                self.flush_callout();
                self.out.push(Block::Callout(Callout {
                    kind,
                    children: vec![Paragraph::new(&body)],
                }));
                return;
            }
            if let Some(topic) = SemanticTopic::parse(&c.text) {
                self.push_paragraph(Paragraph::labelled(topic.label, &topic.body));
                return;
            }
        }

        self.push_paragraph(Paragraph::new(c.text.trim()));
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush_list();
        self.flush_table();
        self.flush_callout();
        self.out
    }

    fn consume_heading(&mut self, h: HeadingSig) {
        self.flush_callout();
        self.sections.on_heading(h.level, &h.title);

        let style = if h.level == 3
            && self.sections.is_compact_card_section()
            && mentions_band(&h.title)
        {
            HeadingStyle::CompactCard
        } else {
            HeadingStyle::Standard
        };
        self.out
            .push(Block::Heading(Heading::new(h.level, &h.title, style)));

        if h.level == 2
            && let Some(kind) = self.sections.active_callout()
        {
            self.open = OpenBlock::Callout {
                kind,
                children: vec![],
            };
        }
    }

    /// Routes a paragraph into the open callout, or emits it directly.
    fn push_paragraph(&mut self, p: Paragraph) {
        match &mut self.open {
            OpenBlock::Callout { children, .. } => children.push(p),
            _ => self.out.push(Block::Paragraph(p)),
        }
    }

    fn push_list_item(&mut self, item: ListItemSig) {
        let switches_kind = matches!(&self.open, OpenBlock::List { kind, .. } if *kind != item.kind);
        if switches_kind {
            self.flush_list();
        }

        let flat = FlatItem::new(item.text, item.level);
        match &mut self.open {
            OpenBlock::List { items, .. } => items.push(flat),
            _ => {
                self.flush();
                self.open = OpenBlock::List {
                    kind: item.kind,
                    items: vec![flat],
                };
            }
        }
    }

    fn push_table_row(&mut self, cells: Vec<String>) {
        match &mut self.open {
            OpenBlock::Table { rows } => rows.push(cells),
            _ => {
                self.flush();
                self.open = OpenBlock::Table { rows: vec![cells] };
            }
        }
    }

    /// Flushes whichever block is open.
    fn flush(&mut self) {
        self.flush_list();
        self.flush_table();
        self.flush_callout();
    }

    fn flush_list(&mut self) {
        let prev = std::mem::take(&mut self.open);
        if let OpenBlock::List { kind, items } = prev {
            let mode = self.list_mode(items.len());
            trace!("flushing {kind:?} list of {} items as {mode:?}", items.len());
            let items = match mode {
                ListMode::FlowText => items
                    .iter()
                    .map(|item| ListNode::leaf(&item.text, 0))
                    .collect(),
                ListMode::Nested => build_tree(&items),
                ListMode::Grid => build_tree(&items)
                    .into_iter()
                    .map(|mut root| {
                        if !root.children.is_empty() {
                            debug!("grid card '{}' drops nested items", root.plain_text());
                            root.children.clear();
                        }
                        root
                    })
                    .collect(),
            };
            self.out.push(Block::List(List { kind, mode, items }));
        } else {
            self.open = prev; // put back non-list block
        }
    }

    fn list_mode(&self, item_count: usize) -> ListMode {
        if !self.general {
            ListMode::Nested
        } else if self.sections.is_executive_summary() && item_count <= GRID_MAX_ITEMS {
            ListMode::Grid
        } else if !self.sections.bullets_allowed() {
            debug!(
                "bullets not allowed in section '{}', flattening list",
                self.sections.section()
            );
            ListMode::FlowText
        } else {
            ListMode::Nested
        }
    }

    fn flush_table(&mut self) {
        let prev = std::mem::take(&mut self.open);
        if let OpenBlock::Table { rows } = prev {
            trace!("flushing table of {} rows", rows.len());
            let (header, body) = TableRow::split_header(rows);
            let to_cells = |row: Vec<String>| row.iter().map(|c| Cell::new(c)).collect::<Vec<_>>();
            self.out.push(Block::Table(Table {
                header: header.map(to_cells),
                rows: body.into_iter().map(to_cells).collect(),
            }));
        } else {
            self.open = prev;
        }
    }

    fn flush_callout(&mut self) {
        let prev = std::mem::take(&mut self.open);
        if let OpenBlock::Callout { kind, children } = prev {
            if children.is_empty() {
                trace!("dropping empty {kind:?} callout");
                return;
            }
            trace!("flushing {kind:?} callout with {} paragraphs", children.len());
            self.out.push(Block::Callout(Callout { kind, children }));
        } else {
            self.open = prev;
        }
    }
}

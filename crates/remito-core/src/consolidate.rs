use indexmap::IndexMap;

use crate::model::{ConsolidatedProduct, ProductLine};

/// Fold product lines into one entry per code, in first-seen-code order.
pub fn consolidate<'a, I>(lines: I) -> Vec<ConsolidatedProduct>
where
    I: IntoIterator<Item = &'a ProductLine>,
{
    let mut consolidator = Consolidator::default();
    for line in lines {
        consolidator.push(line);
    }
    consolidator.finish()
}

/// Incremental form of [`consolidate`] that also counts text conflicts.
///
/// Description and brand always come from the first line seen for a code.
/// A later line whose text differs is still summed; the difference is logged
/// and counted.
#[derive(Debug, Default)]
pub struct Consolidator {
    products: IndexMap<String, ConsolidatedProduct>,
    conflicts: usize,
}

impl Consolidator {
    pub fn push(&mut self, line: &ProductLine) {
        match self.products.get_mut(&line.code) {
            Some(product) => {
                if product.description != line.description || product.brand != line.brand {
                    log::warn!(
                        "code {} in {}: keeping '{} / {}', ignoring '{} / {}'",
                        line.code,
                        line.source_document,
                        product.description,
                        product.brand,
                        line.description,
                        line.brand
                    );
                    self.conflicts += 1;
                }
                product.absorb(line);
            }
            None => {
                self.products
                    .insert(line.code.clone(), ConsolidatedProduct::from_line(line));
            }
        }
    }

    /// Number of lines whose description or brand disagreed with the kept text.
    pub fn conflicts(&self) -> usize {
        self.conflicts
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True before any line has been pushed.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn finish(self) -> Vec<ConsolidatedProduct> {
        self.products.into_values().collect()
    }
}

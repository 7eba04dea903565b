use serde::Serialize;

/// One product line matched on a delivery-note page, before consolidation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductLine {
    /// Leading numeric token, kept verbatim (leading zeros included).
    pub code: String,
    pub description: String,
    pub brand: String,
    pub quantity: u64,
    /// File name of the document the line was read from.
    pub source_document: String,
}

/// All product lines sharing one code, folded together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConsolidatedProduct {
    pub code: String,
    /// Description of the first line seen for this code.
    pub description: String,
    /// Brand of the first line seen for this code.
    pub brand: String,
    /// Exact sum of the line quantities. Lines carry at most `u64::MAX` each,
    /// so a `u128` total cannot overflow.
    pub quantity: u128,
    /// Distinct source documents, in first-seen order.
    pub source_documents: Vec<String>,
}

impl ConsolidatedProduct {
    pub fn from_line(line: &ProductLine) -> Self {
        ConsolidatedProduct {
            code: line.code.clone(),
            description: line.description.clone(),
            brand: line.brand.clone(),
            quantity: u128::from(line.quantity),
            source_documents: vec![line.source_document.clone()],
        }
    }

    /// Add a further line with the same code.
    pub fn absorb(&mut self, line: &ProductLine) {
        self.quantity += u128::from(line.quantity);
        if !self.source_documents.contains(&line.source_document) {
            self.source_documents.push(line.source_document.clone());
        }
    }

    /// Source documents as rendered in the report's last column.
    pub fn joined_sources(&self) -> String {
        self.source_documents.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(code: &str, qty: u64, doc: &str) -> ProductLine {
        ProductLine {
            code: code.into(),
            description: "Tornillo".into(),
            brand: "FISCHER".into(),
            quantity: qty,
            source_document: doc.into(),
        }
    }

    #[test]
    fn absorb_sums_and_dedups_sources() {
        let mut product = ConsolidatedProduct::from_line(&line("7", 2, "b.pdf"));
        product.absorb(&line("7", 3, "a.pdf"));
        product.absorb(&line("7", 5, "b.pdf"));

        assert_eq!(product.quantity, 10);
        assert_eq!(product.source_documents, vec!["b.pdf", "a.pdf"]);
        assert_eq!(product.joined_sources(), "b.pdf, a.pdf");
    }
}

use docx_rs::{DocumentChild, ParagraphChild, RunChild, TableCellContent, TableChild, TableRowChild};

/// Raw text of a Word document: paragraphs one per line, table cells separated by " | ".
pub fn document_text(bytes: &[u8]) -> Result<String, docx_rs::ReaderError> {
    let docx = docx_rs::read_docx(bytes)?;
    let mut out = String::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(paragraph) => {
                push_paragraph(&paragraph.children, &mut out);
                out.push('\n');
            }
            DocumentChild::Table(table) => {
                for row in &table.rows {
                    let TableChild::TableRow(row) = row;
                    for cell in &row.cells {
                        let TableRowChild::TableCell(cell) = cell;
                        for content in &cell.children {
                            if let TableCellContent::Paragraph(paragraph) = content {
                                push_paragraph(&paragraph.children, &mut out);
                                out.push_str(" | ");
                            }
                        }
                    }
                    out.push('\n');
                }
            }
            _ => {}
        }
    }
    Ok(out)
}

fn push_paragraph(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(&run.children, out),
            ParagraphChild::Hyperlink(link) => push_paragraph(&link.children, out),
            _ => {}
        }
    }
}

fn push_run(children: &[RunChild], out: &mut String) {
    for child in children {
        match child {
            RunChild::Text(text) => out.push_str(&text.text),
            RunChild::Tab(_) => out.push(' '),
            RunChild::Break(_) => out.push('\n'),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_zip_is_rejected() {
        assert!(document_text(b"plain bytes, not a zip archive").is_err());
    }
}

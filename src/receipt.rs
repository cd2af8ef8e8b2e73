//! Receipt

use std::io;

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, prelude::FromPrimitive};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::pricing::PriceQuote;

/// Errors that can occur when writing a quote.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// IO error
    #[error("IO error")]
    IO,
}

impl PriceQuote {
    /// Writes the quote as a table followed by a summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["", "Service", "Price"]);

        for (idx, line) in self.lines().iter().enumerate() {
            builder.push_record([
                format!("#{:<3}", idx + 1),
                line.service.to_string(),
                line.price.map_or_else(|| "-".to_string(), |price| price.to_string()),
            ]);
        }

        for applied in self.discounts() {
            builder.push_record([
                String::new(),
                applied.rule.name().to_string(),
                format!("-{}", applied.amount),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(2..3), Alignment::right());

        writeln!(out, "\n{table}").map_err(|_err| ReceiptError::IO)?;

        write_summary(&mut out, self)
    }
}

fn write_summary(out: &mut impl io::Write, quote: &PriceQuote) -> Result<(), ReceiptError> {
    let savings_points = percent_points_from_fractional_percentage(quote.savings_percent());

    let lines = [
        ("Year:", quote.year().to_string()),
        ("Base price:", quote.base_price().to_string()),
        (
            "Savings:",
            format!("({savings_points:.2}%) {}", quote.savings()),
        ),
        ("Final price:", quote.final_price().to_string()),
    ];

    let label_width = lines.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let value_width = lines.iter().map(|(_, value)| value.len()).max().unwrap_or(0);

    for (label, value) in &lines {
        writeln!(out, " {label:<label_width$} {value:>value_width$}")
            .map_err(|_err| ReceiptError::IO)?;
    }

    writeln!(out).map_err(|_err| ReceiptError::IO)
}

/// Converts a fractional percentage to percent points for display.
fn percent_points_from_fractional_percentage(percentage: Percentage) -> Decimal {
    // `Percentage` is a fraction (e.g. 0.25), so multiply by 100 to print percent points.
    ((percentage * Decimal::ONE) * Decimal::from_i64(100).unwrap_or(Decimal::ZERO)).round_dp(2)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    use crate::{
        catalog::Catalog,
        pricing::calculate,
        selection::Selection,
        services::{ServiceType, ServiceYear},
    };

    fn render(services: impl Into<Selection>, year: ServiceYear) -> Result<String, ReceiptError> {
        let quote = calculate(&Catalog::standard(), &services.into(), year);
        let mut out = Vec::new();

        quote.write_to(&mut out)?;

        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    #[test]
    fn lists_services_and_discounts() -> TestResult {
        let output = render(
            [
                ServiceType::Photography,
                ServiceType::VideoRecording,
                ServiceType::WeddingSession,
            ],
            ServiceYear::Y2021,
        )?;

        assert!(output.contains("Photography"), "missing service row");
        assert!(output.contains("Video recording"), "missing service row");
        assert!(output.contains("Wedding session"), "missing service row");
        assert!(output.contains("Photography + video"), "missing discount row");
        assert!(output.contains("-1300"), "missing discount amount");
        assert!(output.contains("Wedding session combo"), "missing discount row");
        assert!(output.contains("4200"), "missing base price");
        assert!(output.contains("2600"), "missing final price");

        Ok(())
    }

    #[test]
    fn empty_quote_renders_zero_savings() -> TestResult {
        let output = render(Selection::new(), ServiceYear::Y2020)?;

        assert!(output.contains("(0.00%) 0"), "unexpected summary: {output}");

        Ok(())
    }

    #[test]
    fn percent_points_from_fraction() {
        let points = percent_points_from_fractional_percentage(Percentage::from(0.25));

        assert_eq!(points, Decimal::from(25));
    }

    #[test]
    fn write_failure_is_reported() {
        struct FailingWriter;

        impl io::Write for FailingWriter {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let quote = calculate(
            &Catalog::standard(),
            &Selection::from([ServiceType::Photography]),
            ServiceYear::Y2020,
        );

        assert!(matches!(quote.write_to(FailingWriter), Err(ReceiptError::IO)));
    }
}

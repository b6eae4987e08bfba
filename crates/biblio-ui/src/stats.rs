use std::collections::HashMap;

use biblio_types::{Book, Loan, LoanStatus};

/// Headline figures of the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LoanStats {
    pub total_books: usize,
    pub active: usize,
    pub overdue: usize,
    pub returned: usize,
}

impl LoanStats {
    pub fn compute(books: &[Book], loans: &[Loan]) -> Self {
        let count = |status: LoanStatus| loans.iter().filter(|l| l.statut == status).count();
        Self {
            total_books: books.len(),
            active: count(LoanStatus::Active),
            overdue: count(LoanStatus::Overdue),
            returned: count(LoanStatus::Returned),
        }
    }

    /// Percentage of books currently out of the library.
    pub fn occupancy_pct(&self) -> f32 {
        percent(self.active + self.overdue, self.total_books)
    }

    /// Percentage of open loans that are late.
    pub fn overdue_pct(&self) -> f32 {
        percent(self.overdue, self.active + self.overdue)
    }
}

fn percent(part: usize, whole: usize) -> f32 {
    if whole == 0 {
        return 0.0;
    }
    (part as f32 / whole as f32 * 100.0).min(100.0)
}

#[derive(Clone, Debug, PartialEq)]
pub struct BorrowCount {
    pub titre: String,
    pub count: usize,
}

/// Most borrowed titles, highest first. Loans on unknown books are labelled
/// by id.
pub fn most_borrowed(books: &[Book], loans: &[Loan], limit: usize) -> Vec<BorrowCount> {
    let mut counts: HashMap<i64, usize> = HashMap::new();
    for loan in loans {
        *counts.entry(loan.livre_id).or_default() += 1;
    }

    let mut ranked: Vec<BorrowCount> = counts
        .into_iter()
        .map(|(bookId, count)| BorrowCount {
            titre: books
                .iter()
                .find(|b| b.id == bookId)
                .map(|b| b.titre.clone())
                .unwrap_or_else(|| format!("Livre {bookId}")),
            count,
        })
        .collect();

    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.titre.cmp(&b.titre)));
    ranked.truncate(limit);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: i64, titre: &str) -> Book {
        Book {
            id,
            titre: titre.into(),
            ..Book::default()
        }
    }

    fn loan(id: i64, livreId: i64, statut: LoanStatus) -> Loan {
        Loan {
            id,
            utilisateur_id: 1,
            livre_id: livreId,
            date_emprunt: None,
            date_retour_prevue: None,
            date_retour_effective: None,
            statut,
            date_creation: None,
        }
    }

    #[test]
    fn counts_by_status() {
        let books = vec![book(1, "Dune"), book(2, "Nedjma"), book(3, "Zarathoustra"), book(4, "L'Alchimiste")];
        let loans = vec![
            loan(1, 1, LoanStatus::Active),
            loan(2, 2, LoanStatus::Overdue),
            loan(3, 1, LoanStatus::Returned),
        ];
        let stats = LoanStats::compute(&books, &loans);

        assert_eq!(
            stats,
            LoanStats {
                total_books: 4,
                active: 1,
                overdue: 1,
                returned: 1
            }
        );
        assert_eq!(stats.occupancy_pct(), 50.0);
        assert_eq!(stats.overdue_pct(), 50.0);
    }

    #[test]
    fn empty_library_has_zero_ratios() {
        let stats = LoanStats::compute(&[], &[]);
        assert_eq!(stats.occupancy_pct(), 0.0);
        assert_eq!(stats.overdue_pct(), 0.0);
    }

    #[test]
    fn ranking_orders_by_count_then_title() {
        let books = vec![book(1, "Dune"), book(2, "Nedjma")];
        let loans = vec![
            loan(1, 2, LoanStatus::Returned),
            loan(2, 2, LoanStatus::Active),
            loan(3, 1, LoanStatus::Returned),
            loan(4, 9, LoanStatus::Returned),
        ];
        let ranked = most_borrowed(&books, &loans, 2);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0], BorrowCount { titre: "Nedjma".into(), count: 2 });
        assert_eq!(ranked[1], BorrowCount { titre: "Dune".into(), count: 1 });
    }

    #[test]
    fn unknown_books_are_labelled_by_id() {
        let ranked = most_borrowed(&[], &[loan(1, 42, LoanStatus::Active)], 6);
        assert_eq!(ranked[0].titre, "Livre 42");
    }
}

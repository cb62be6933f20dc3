//! In-memory analytics export workbooks for integration tests.

#![allow(dead_code)]

use rust_xlsxwriter::{Workbook, Worksheet};

#[derive(Debug, Clone, Copy)]
pub enum Cell {
    Text(&'static str),
    Number(f64),
    Blank,
}

pub use Cell::{Blank, Number, Text};

pub struct Export {
    workbook: Workbook,
}

impl Export {
    pub fn new() -> Self {
        Export {
            workbook: Workbook::new(),
        }
    }

    /// The five sheets of a typical 2025 export.
    pub fn standard() -> Self {
        Export::new()
            .discovery()
            .engagement(&[
                ("12/31/2024", 900.0, 90.0),
                ("1/1/2025", 100.0, 5.0),
                ("2/1/2025", 200.0, 3.0),
                ("2/2/2025", 200.0, 5.0),
            ])
            .top_posts(&[30.0, 20.0, 10.0], &[1500.0, 900.0, 300.0])
            // 45717 is the serial for 2025-03-01
            .followers(&[
                (Text("1/4/2025"), 4.0),
                (Number(45717.0), 20.0),
                (Text("1/20/2025"), 6.0),
                (Text("12/30/2024"), 50.0),
            ])
            .demographics(&[
                ("Job titles", "Founder"),
                ("Job titles", "Software Engineer"),
                ("Locations", "US"),
                ("Seniority", "Manager"),
                ("Locations", "UK"),
                ("Industries", "Software Development"),
                ("Companies", "Acme"),
            ])
    }

    pub fn sheet(mut self, name: &str, rows: &[Vec<Cell>]) -> Self {
        let sheet = self.workbook.add_worksheet();
        sheet.set_name(name).unwrap();
        write_rows(sheet, 0, rows);
        self
    }

    pub fn discovery(self) -> Self {
        self.sheet(
            "DISCOVERY",
            &[
                vec![Text("Overall Performance"), Text("1/1/2025 - 12/31/2025")],
                vec![Text("Impressions"), Number(12_345.0)],
                vec![Text("Members reached"), Number(6_789.0)],
            ],
        )
    }

    pub fn engagement(self, rows: &[(&'static str, f64, f64)]) -> Self {
        let mut data = vec![vec![Text("Date"), Text("Impressions"), Text("Engagements")]];
        data.extend(
            rows.iter()
                .map(|&(date, imp, eng)| vec![Text(date), Number(imp), Number(eng)]),
        );
        self.sheet("ENGAGEMENT", &data)
    }

    pub fn top_posts(self, engagements: &[f64], impressions: &[f64]) -> Self {
        let mut data = vec![
            vec![Text("Maximum 50 posts available to include in this list")],
            vec![],
            vec![
                Text("Post URL"),
                Text("Post publish date"),
                Text("Engagements"),
                Blank,
                Text("Post URL"),
                Text("Post publish date"),
                Text("Impressions"),
            ],
        ];
        for i in 0..engagements.len().max(impressions.len()) {
            let mut row = vec![Blank; 7];
            if let Some(&eng) = engagements.get(i) {
                row[0] = Text("https://www.linkedin.com/feed/update/eng");
                row[1] = Text("1/2/2025");
                row[2] = Number(eng);
            }
            if let Some(&imp) = impressions.get(i) {
                row[4] = Text("https://www.linkedin.com/feed/update/imp");
                row[5] = Text("1/2/2025");
                row[6] = Number(imp);
            }
            data.push(row);
        }
        self.sheet("TOP POSTS", &data)
    }

    pub fn followers(self, rows: &[(Cell, f64)]) -> Self {
        let mut data = vec![
            vec![Text("Total followers on 12/31/2025:"), Number(1_042.0)],
            vec![],
            vec![Text("Date"), Text("New followers")],
        ];
        data.extend(rows.iter().map(|&(date, count)| vec![date, Number(count)]));
        self.sheet("FOLLOWERS", &data)
    }

    pub fn demographics(self, rows: &[(&'static str, &'static str)]) -> Self {
        let mut data = vec![vec![Text("Top Demographics"), Text("Value"), Text("Percentage")]];
        data.extend(
            rows.iter()
                .map(|&(category, value)| vec![Text(category), Text(value), Number(0.1)]),
        );
        self.sheet("DEMOGRAPHICS", &data)
    }

    pub fn bytes(mut self) -> Vec<u8> {
        self.workbook.save_to_buffer().unwrap()
    }
}

fn write_rows(sheet: &mut Worksheet, first_row: u32, rows: &[Vec<Cell>]) {
    for (r, row) in rows.iter().enumerate() {
        let r = first_row + r as u32;
        for (c, cell) in row.iter().enumerate() {
            let c = c as u16;
            match *cell {
                Text(s) => {
                    sheet.write_string(r, c, s).unwrap();
                }
                Number(n) => {
                    sheet.write_number(r, c, n).unwrap();
                }
                Blank => {}
            }
        }
    }
}

// SPDX-FileCopyrightText: 2026 Siteline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Product listing over the externally-owned products table.

use siteline_core::SitelineError;

use crate::database::Database;
use crate::models::Product;

/// Fetch every product row, verbatim, in id order.
///
/// No filtering, pagination, or caching; an empty table yields an empty Vec.
pub async fn list_products(db: &Database) -> Result<Vec<Product>, SitelineError> {
    db.connection()
        .call(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, description, category, price, image_url, is_available, link
                 FROM products ORDER BY id ASC",
            )?;
            let rows = stmt.query_map([], |row| {
                Ok(Product {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    description: row.get(2)?,
                    category: row.get(3)?,
                    price: row.get(4)?,
                    image_url: row.get(5)?,
                    is_available: row.get(6)?,
                    link: row.get(7)?,
                })
            })?;
            let mut products = Vec::new();
            for row in rows {
                products.push(row?);
            }
            Ok(products)
        })
        .await
        .map_err(crate::database::map_tr_err)
}

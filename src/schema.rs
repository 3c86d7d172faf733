// Mirrors sql/stocks.sql.
diesel::table! {
    stocks (stockid) {
        stockid -> Int8,
        name -> Text,
        price -> Int8,
        company -> Text,
    }
}

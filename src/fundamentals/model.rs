use serde::Serialize;

use crate::core::QuotedValue;

/// Valuation, profitability, leverage and growth ratios for a symbol.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Ratios {
    /// Trailing price-to-earnings.
    pub price_to_earnings: Option<QuotedValue>,
    pub price_to_book: Option<QuotedValue>,
    /// Trailing twelve-month price-to-sales.
    pub price_to_sales: Option<QuotedValue>,
    pub enterprise_to_revenue: Option<QuotedValue>,
    pub enterprise_to_ebitda: Option<QuotedValue>,
    pub return_on_equity: Option<QuotedValue>,
    pub return_on_assets: Option<QuotedValue>,
    pub gross_margins: Option<QuotedValue>,
    pub ebitda_margins: Option<QuotedValue>,
    pub operating_margins: Option<QuotedValue>,
    pub profit_margins: Option<QuotedValue>,
    pub current_ratio: Option<QuotedValue>,
    pub quick_ratio: Option<QuotedValue>,
    pub debt_to_equity: Option<QuotedValue>,
    pub total_debt_to_capital: Option<QuotedValue>,
    pub earnings_growth: Option<QuotedValue>,
    pub revenue_growth: Option<QuotedValue>,
    pub earnings_per_share: Option<QuotedValue>,
    pub book_value_per_share: Option<QuotedValue>,
    pub dividend_rate: Option<QuotedValue>,
    pub dividend_yield: Option<QuotedValue>,
}

/// Key statistics, led by `defaultKeyStatistics`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    /// Upstream cache age of the statistics block, in seconds.
    pub max_age: Option<i64>,
    pub market_cap: Option<QuotedValue>,
    pub enterprise_value: Option<QuotedValue>,
    pub forward_pe: Option<QuotedValue>,
    pub trailing_pe: Option<QuotedValue>,
    pub peg_ratio: Option<QuotedValue>,
    pub price_to_sales_trailing_12_months: Option<QuotedValue>,
    pub price_to_book: Option<QuotedValue>,
    pub beta: Option<QuotedValue>,
    pub fifty_two_week_low: Option<QuotedValue>,
    pub fifty_two_week_high: Option<QuotedValue>,
    pub fifty_day_average: Option<QuotedValue>,
    pub two_hundred_day_average: Option<QuotedValue>,
}

/// The most recent income statement.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IncomeStatement {
    /// Period end (`raw` is epoch seconds).
    pub end_date: Option<QuotedValue>,
    pub total_revenue: Option<QuotedValue>,
    pub gross_profit: Option<QuotedValue>,
    pub operating_income: Option<QuotedValue>,
    pub net_income: Option<QuotedValue>,
    pub ebitda: Option<QuotedValue>,
    pub earnings_per_share: Option<QuotedValue>,
}

/// The most recent balance sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BalanceSheet {
    /// Period end (`raw` is epoch seconds).
    pub end_date: Option<QuotedValue>,
    pub total_assets: Option<QuotedValue>,
    pub total_liabilities: Option<QuotedValue>,
    pub total_equity: Option<QuotedValue>,
    pub total_debt: Option<QuotedValue>,
    pub cash: Option<QuotedValue>,
    pub short_term_debt: Option<QuotedValue>,
    pub long_term_debt: Option<QuotedValue>,
    pub book_value_per_share: Option<QuotedValue>,
}

/// The most recent cash-flow statement.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CashFlow {
    /// Period end (`raw` is epoch seconds).
    pub end_date: Option<QuotedValue>,
    pub operating_cash_flow: Option<QuotedValue>,
    pub free_cash_flow: Option<QuotedValue>,
    pub capital_expenditures: Option<QuotedValue>,
    pub dividends_paid: Option<QuotedValue>,
}

/// Dividend figures.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DividendInfo {
    /// Annual dividend per share.
    pub dividend_rate: Option<QuotedValue>,
    pub dividend_yield: Option<QuotedValue>,
    /// Dividends paid in the most recent cash-flow period (negative upstream).
    pub dividends_paid: Option<QuotedValue>,
    pub payout_ratio: Option<QuotedValue>,
    pub ex_dividend_date: Option<QuotedValue>,
    pub dividend_date: Option<QuotedValue>,
    pub five_year_avg_dividend_yield: Option<QuotedValue>,
}

/// Everything [`crate::Ticker::financial_data`] returns in one request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FinancialData {
    pub ratios: Ratios,
    pub summary: Summary,
    pub income_statement: IncomeStatement,
    pub balance_sheet: BalanceSheet,
    pub cash_flow: CashFlow,
}

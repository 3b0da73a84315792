use serde::Deserialize;

use crate::core::{QuotedValue, wire::quoted};

/* ---------------- Serde mapping (only what we need) ---------------- */

/// One quoteSummary result. Every module is independently optional.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct V10Result {
    pub(crate) summary_detail: Option<SummaryDetailNode>,
    pub(crate) default_key_statistics: Option<KeyStatisticsNode>,
    pub(crate) financial_data: Option<FinancialDataNode>,
    pub(crate) income_statement_history: Option<IncomeHistoryNode>,
    pub(crate) balance_sheet_history: Option<BalanceHistoryNode>,
    pub(crate) cashflow_statement_history: Option<CashflowHistoryNode>,
    pub(crate) calendar_events: Option<CalendarEventsNode>,
}

/* --- summaryDetail --- */
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SummaryDetailNode {
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) market_cap: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted", rename = "forwardPE")]
    pub(crate) forward_pe: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted", rename = "trailingPE")]
    pub(crate) trailing_pe: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) price_to_sales_trailing12_months: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) price_to_book: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) beta: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) dividend_rate: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) dividend_yield: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) ex_dividend_date: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) dividend_date: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) payout_ratio: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) five_year_avg_dividend_yield: Option<QuotedValue>,
}

/* --- defaultKeyStatistics --- */
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct KeyStatisticsNode {
    #[serde(default)]
    pub(crate) max_age: Option<i64>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) market_cap: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) enterprise_value: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted", rename = "forwardPE")]
    pub(crate) forward_pe: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted", rename = "trailingPE")]
    pub(crate) trailing_pe: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) peg_ratio: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) price_to_sales_trailing12_months: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) price_to_book: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) beta: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) fifty_two_week_low: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) fifty_two_week_high: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) fifty_day_average: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) two_hundred_day_average: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) enterprise_to_revenue: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) enterprise_to_ebitda: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) dividend_rate: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) dividend_yield: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) payout_ratio: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) five_year_avg_dividend_yield: Option<QuotedValue>,
}

/* --- financialData --- */
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FinancialDataNode {
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) return_on_equity: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) return_on_assets: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) gross_margins: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) ebitda_margins: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) operating_margins: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) profit_margins: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) current_ratio: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) quick_ratio: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) debt_to_equity: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) total_debt_to_capital: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) earnings_growth: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) revenue_growth: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) earnings_per_share: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) book_value_per_share: Option<QuotedValue>,
}

/* --- income --- */
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IncomeHistoryNode {
    pub(crate) income_statement_history: Option<Vec<IncomeRowNode>>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IncomeRowNode {
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) end_date: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) total_revenue: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) gross_profit: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) operating_income: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) net_income: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) ebitda: Option<QuotedValue>,
}

/* --- balance --- */
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BalanceHistoryNode {
    pub(crate) balance_sheet_statements: Option<Vec<BalanceRowNode>>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BalanceRowNode {
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) end_date: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) total_assets: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) total_liab: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) total_stockholder_equity: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) total_debt: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) cash: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) short_long_term_debt: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) long_term_debt: Option<QuotedValue>,
}

/* --- cashflow --- */
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CashflowHistoryNode {
    pub(crate) cashflow_statements: Option<Vec<CashflowRowNode>>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CashflowRowNode {
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) end_date: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) total_cash_from_operating_activities: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) capital_expenditures: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted", alias = "freeCashflow")]
    pub(crate) free_cash_flow: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) dividends_paid: Option<QuotedValue>,
}

/* --- calendar --- */
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CalendarEventsNode {
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) ex_dividend_date: Option<QuotedValue>,
    #[serde(default, deserialize_with = "quoted")]
    pub(crate) dividend_date: Option<QuotedValue>,
}

/* --- most recent statement (upstream lists newest first) --- */

impl IncomeHistoryNode {
    pub(crate) fn latest(&self) -> Option<&IncomeRowNode> {
        self.income_statement_history.as_deref()?.first()
    }
}

impl BalanceHistoryNode {
    pub(crate) fn latest(&self) -> Option<&BalanceRowNode> {
        self.balance_sheet_statements.as_deref()?.first()
    }
}

impl CashflowHistoryNode {
    pub(crate) fn latest(&self) -> Option<&CashflowRowNode> {
        self.cashflow_statements.as_deref()?.first()
    }
}

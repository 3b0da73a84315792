//! Declarative merge of a quoteSummary result into the output records.
//!
//! Each output field owns an ordered list of `(module, accessor)` sources. The
//! first source whose module is present and carries a value wins; later
//! sources are fallbacks only and never override a filled field.

use crate::core::QuotedValue;

use super::model::{BalanceSheet, CashFlow, DividendInfo, IncomeStatement, Ratios, Summary};
use super::wire::V10Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Module {
    SummaryDetail,
    DefaultKeyStatistics,
    FinancialData,
    IncomeStatementHistory,
    BalanceSheetHistory,
    CashflowStatementHistory,
    CalendarEvents,
}

impl Module {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::SummaryDetail => "summaryDetail",
            Self::DefaultKeyStatistics => "defaultKeyStatistics",
            Self::FinancialData => "financialData",
            Self::IncomeStatementHistory => "incomeStatementHistory",
            Self::BalanceSheetHistory => "balanceSheetHistory",
            Self::CashflowStatementHistory => "cashflowStatementHistory",
            Self::CalendarEvents => "calendarEvents",
        }
    }
}

pub(crate) struct Source {
    pub(crate) module: Module,
    pub(crate) get: fn(&V10Result) -> Option<&QuotedValue>,
}

pub(crate) struct FieldRule<R> {
    pub(crate) field: &'static str,
    pub(crate) slot: fn(&mut R) -> &mut Option<QuotedValue>,
    pub(crate) sources: &'static [Source],
}

/// A field read straight off a module node.
macro_rules! from {
    ($module:ident, $node:ident . $field:ident) => {
        Source {
            module: Module::$module,
            get: |r| r.$node.as_ref()?.$field.as_ref(),
        }
    };
}

/// A field read off the most recent entry of a statement history.
macro_rules! latest {
    ($module:ident, $node:ident . $field:ident) => {
        Source {
            module: Module::$module,
            get: |r| r.$node.as_ref()?.latest()?.$field.as_ref(),
        }
    };
}

macro_rules! rule {
    ($field:ident: $($src:expr),+ $(,)?) => {
        FieldRule {
            field: stringify!($field),
            slot: |out| &mut out.$field,
            sources: &[$($src),+],
        }
    };
}

pub(crate) const RATIO_RULES: &[FieldRule<Ratios>] = &[
    rule!(price_to_earnings:
        from!(SummaryDetail, summary_detail.trailing_pe),
        from!(DefaultKeyStatistics, default_key_statistics.trailing_pe)),
    rule!(price_to_book:
        from!(SummaryDetail, summary_detail.price_to_book),
        from!(DefaultKeyStatistics, default_key_statistics.price_to_book)),
    rule!(price_to_sales: from!(SummaryDetail, summary_detail.price_to_sales_trailing12_months)),
    rule!(enterprise_to_revenue: from!(DefaultKeyStatistics, default_key_statistics.enterprise_to_revenue)),
    rule!(enterprise_to_ebitda: from!(DefaultKeyStatistics, default_key_statistics.enterprise_to_ebitda)),
    rule!(return_on_equity: from!(FinancialData, financial_data.return_on_equity)),
    rule!(return_on_assets: from!(FinancialData, financial_data.return_on_assets)),
    rule!(gross_margins: from!(FinancialData, financial_data.gross_margins)),
    rule!(ebitda_margins: from!(FinancialData, financial_data.ebitda_margins)),
    rule!(operating_margins: from!(FinancialData, financial_data.operating_margins)),
    rule!(profit_margins: from!(FinancialData, financial_data.profit_margins)),
    rule!(current_ratio: from!(FinancialData, financial_data.current_ratio)),
    rule!(quick_ratio: from!(FinancialData, financial_data.quick_ratio)),
    rule!(debt_to_equity: from!(FinancialData, financial_data.debt_to_equity)),
    rule!(total_debt_to_capital: from!(FinancialData, financial_data.total_debt_to_capital)),
    rule!(earnings_growth: from!(FinancialData, financial_data.earnings_growth)),
    rule!(revenue_growth: from!(FinancialData, financial_data.revenue_growth)),
    rule!(earnings_per_share: from!(FinancialData, financial_data.earnings_per_share)),
    rule!(book_value_per_share: from!(FinancialData, financial_data.book_value_per_share)),
    rule!(dividend_rate: from!(SummaryDetail, summary_detail.dividend_rate)),
    rule!(dividend_yield: from!(SummaryDetail, summary_detail.dividend_yield)),
];

pub(crate) const SUMMARY_RULES: &[FieldRule<Summary>] = &[
    rule!(market_cap:
        from!(DefaultKeyStatistics, default_key_statistics.market_cap),
        from!(SummaryDetail, summary_detail.market_cap)),
    rule!(enterprise_value: from!(DefaultKeyStatistics, default_key_statistics.enterprise_value)),
    rule!(forward_pe:
        from!(DefaultKeyStatistics, default_key_statistics.forward_pe),
        from!(SummaryDetail, summary_detail.forward_pe)),
    rule!(trailing_pe:
        from!(DefaultKeyStatistics, default_key_statistics.trailing_pe),
        from!(SummaryDetail, summary_detail.trailing_pe)),
    rule!(peg_ratio: from!(DefaultKeyStatistics, default_key_statistics.peg_ratio)),
    rule!(price_to_sales_trailing_12_months:
        from!(DefaultKeyStatistics, default_key_statistics.price_to_sales_trailing12_months),
        from!(SummaryDetail, summary_detail.price_to_sales_trailing12_months)),
    rule!(price_to_book:
        from!(DefaultKeyStatistics, default_key_statistics.price_to_book),
        from!(SummaryDetail, summary_detail.price_to_book)),
    rule!(beta:
        from!(DefaultKeyStatistics, default_key_statistics.beta),
        from!(SummaryDetail, summary_detail.beta)),
    rule!(fifty_two_week_low: from!(DefaultKeyStatistics, default_key_statistics.fifty_two_week_low)),
    rule!(fifty_two_week_high: from!(DefaultKeyStatistics, default_key_statistics.fifty_two_week_high)),
    rule!(fifty_day_average: from!(DefaultKeyStatistics, default_key_statistics.fifty_day_average)),
    rule!(two_hundred_day_average: from!(DefaultKeyStatistics, default_key_statistics.two_hundred_day_average)),
];

pub(crate) const INCOME_RULES: &[FieldRule<IncomeStatement>] = &[
    rule!(end_date: latest!(IncomeStatementHistory, income_statement_history.end_date)),
    rule!(total_revenue: latest!(IncomeStatementHistory, income_statement_history.total_revenue)),
    rule!(gross_profit: latest!(IncomeStatementHistory, income_statement_history.gross_profit)),
    rule!(operating_income: latest!(IncomeStatementHistory, income_statement_history.operating_income)),
    rule!(net_income: latest!(IncomeStatementHistory, income_statement_history.net_income)),
    rule!(ebitda: latest!(IncomeStatementHistory, income_statement_history.ebitda)),
    rule!(earnings_per_share: from!(FinancialData, financial_data.earnings_per_share)),
];

pub(crate) const BALANCE_RULES: &[FieldRule<BalanceSheet>] = &[
    rule!(end_date: latest!(BalanceSheetHistory, balance_sheet_history.end_date)),
    rule!(total_assets: latest!(BalanceSheetHistory, balance_sheet_history.total_assets)),
    rule!(total_liabilities: latest!(BalanceSheetHistory, balance_sheet_history.total_liab)),
    rule!(total_equity: latest!(BalanceSheetHistory, balance_sheet_history.total_stockholder_equity)),
    rule!(total_debt: latest!(BalanceSheetHistory, balance_sheet_history.total_debt)),
    rule!(cash: latest!(BalanceSheetHistory, balance_sheet_history.cash)),
    rule!(short_term_debt: latest!(BalanceSheetHistory, balance_sheet_history.short_long_term_debt)),
    rule!(long_term_debt: latest!(BalanceSheetHistory, balance_sheet_history.long_term_debt)),
    rule!(book_value_per_share: from!(FinancialData, financial_data.book_value_per_share)),
];

pub(crate) const CASH_FLOW_RULES: &[FieldRule<CashFlow>] = &[
    rule!(end_date: latest!(CashflowStatementHistory, cashflow_statement_history.end_date)),
    rule!(operating_cash_flow:
        latest!(CashflowStatementHistory, cashflow_statement_history.total_cash_from_operating_activities)),
    rule!(free_cash_flow: latest!(CashflowStatementHistory, cashflow_statement_history.free_cash_flow)),
    rule!(capital_expenditures:
        latest!(CashflowStatementHistory, cashflow_statement_history.capital_expenditures)),
    rule!(dividends_paid: latest!(CashflowStatementHistory, cashflow_statement_history.dividends_paid)),
];

pub(crate) const DIVIDEND_RULES: &[FieldRule<DividendInfo>] = &[
    rule!(dividend_rate:
        from!(SummaryDetail, summary_detail.dividend_rate),
        from!(DefaultKeyStatistics, default_key_statistics.dividend_rate)),
    rule!(dividend_yield:
        from!(SummaryDetail, summary_detail.dividend_yield),
        from!(DefaultKeyStatistics, default_key_statistics.dividend_yield)),
    rule!(dividends_paid: latest!(CashflowStatementHistory, cashflow_statement_history.dividends_paid)),
    rule!(payout_ratio:
        from!(SummaryDetail, summary_detail.payout_ratio),
        from!(DefaultKeyStatistics, default_key_statistics.payout_ratio)),
    rule!(ex_dividend_date:
        from!(SummaryDetail, summary_detail.ex_dividend_date),
        from!(CalendarEvents, calendar_events.ex_dividend_date)),
    rule!(dividend_date:
        from!(SummaryDetail, summary_detail.dividend_date),
        from!(CalendarEvents, calendar_events.dividend_date)),
    rule!(five_year_avg_dividend_yield:
        from!(SummaryDetail, summary_detail.five_year_avg_dividend_yield),
        from!(DefaultKeyStatistics, default_key_statistics.five_year_avg_dividend_yield)),
];

fn resolve<'a>(result: &'a V10Result, sources: &[Source]) -> Option<(Module, &'a QuotedValue)> {
    sources
        .iter()
        .find_map(|s| (s.get)(result).map(|v| (s.module, v)))
}

/// Builds `R` by evaluating every rule against `result`.
pub(crate) fn apply<R: Default>(result: &V10Result, rules: &[FieldRule<R>]) -> R {
    let mut out = R::default();
    for rule in rules {
        if let Some((module, value)) = resolve(result, rule.sources) {
            tracing::trace!(field = rule.field, module = module.as_str(), "merged");
            *(rule.slot)(&mut out) = Some(value.clone());
        }
    }
    out
}

pub(crate) fn ratios(result: &V10Result) -> Ratios {
    apply(result, RATIO_RULES)
}

pub(crate) fn summary(result: &V10Result) -> Summary {
    let mut summary = apply(result, SUMMARY_RULES);
    summary.max_age = result.default_key_statistics.as_ref().and_then(|k| k.max_age);
    summary
}

pub(crate) fn income_statement(result: &V10Result) -> IncomeStatement {
    apply(result, INCOME_RULES)
}

pub(crate) fn balance_sheet(result: &V10Result) -> BalanceSheet {
    apply(result, BALANCE_RULES)
}

pub(crate) fn cash_flow(result: &V10Result) -> CashFlow {
    apply(result, CASH_FLOW_RULES)
}

pub(crate) fn dividend_info(result: &V10Result) -> DividendInfo {
    apply(result, DIVIDEND_RULES)
}

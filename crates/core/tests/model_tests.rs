use coin_portfolio_core::format::{currency_with_2_decimals, percent_string, with_abbreviations};
use coin_portfolio_core::models::coin::{Coin, UNRANKED};
use coin_portfolio_core::models::market::{GlobalDataResponse, GlobalMarketData, MarketSnapshot};
use coin_portfolio_core::models::portfolio::PortfolioEntity;
use coin_portfolio_core::models::settings::{Settings, ZeroBaselineChange};
use coin_portfolio_core::models::sort::{SortColumn, SortOption};
use coin_portfolio_core::models::statistic::Statistic;
use coin_portfolio_core::models::view::HomeViewState;
use std::collections::HashMap;

// ═══════════════════════════════════════════════════════════════════
//  Coin
// ═══════════════════════════════════════════════════════════════════

mod coin {
    use super::*;

    fn btc() -> Coin {
        Coin::new("bitcoin", "btc", "Bitcoin", 1, 30_000.0).with_price_change(2.0)
    }

    #[test]
    fn new_has_no_holdings() {
        let c = btc();
        assert_eq!(c.holding_amount, None);
        assert_eq!(c.current_holdings_value(), 0.0);
    }

    #[test]
    fn with_holdings_sets_amount_on_copy() {
        let c = btc();
        let held = c.with_holdings(0.5);
        assert_eq!(held.holding_amount, Some(0.5));
        assert_eq!(held.current_holdings_value(), 15_000.0);
        // the source coin is untouched
        assert_eq!(c.holding_amount, None);
        assert_eq!(held.id, c.id);
        assert_eq!(held.price_change_percentage_24h, Some(2.0));
    }

    #[test]
    fn zero_amount_means_zero_value() {
        assert_eq!(btc().with_holdings(0.0).current_holdings_value(), 0.0);
    }

    #[test]
    fn matches_on_name_symbol_or_id() {
        let c = Coin::new("wrapped-bitcoin", "wbtc", "Wrapped Bitcoin", 20, 30_000.0);
        assert!(c.matches_lowercase("wrapped"));
        assert!(c.matches_lowercase("wbt"));
        assert!(c.matches_lowercase("d-bit"));
        assert!(c.matches_lowercase("bitcoin"));
        assert!(!c.matches_lowercase("eth"));
    }

    #[test]
    fn deserializes_from_market_feed_json() {
        let json = r#"{
            "id": "ethereum",
            "symbol": "eth",
            "name": "Ethereum",
            "image": "https://example.invalid/eth.png",
            "current_price": 1850.25,
            "market_cap_rank": 2,
            "price_change_percentage_24h": -1.5,
            "last_updated": "2024-03-01T12:00:00.000Z"
        }"#;
        let c: Coin = serde_json::from_str(json).unwrap();
        assert_eq!(c.id, "ethereum");
        assert_eq!(c.rank, 2);
        assert_eq!(c.current_price, 1850.25);
        assert_eq!(c.price_change_percentage_24h, Some(-1.5));
        assert_eq!(c.holding_amount, None);
        assert!(c.last_updated.is_some());
    }

    #[test]
    fn deserializes_with_null_price_change() {
        let json = r#"{"id":"x","symbol":"x","name":"X","current_price":1.0,"rank":9,"price_change_percentage_24h":null}"#;
        let c: Coin = serde_json::from_str(json).unwrap();
        assert_eq!(c.rank, 9);
        assert_eq!(c.price_change_percentage_24h, None);
    }

    #[test]
    fn null_or_missing_rank_is_unranked() {
        let feed = r#"[
            {"id":"a","symbol":"a","name":"A","current_price":1.0,"market_cap_rank":null},
            {"id":"b","symbol":"b","name":"B","current_price":2.0},
            {"id":"c","symbol":"c","name":"C","current_price":3.0,"market_cap_rank":7}
        ]"#;
        let coins: Vec<Coin> = serde_json::from_str(feed).unwrap();
        assert_eq!(coins[0].rank, UNRANKED);
        assert_eq!(coins[1].rank, UNRANKED);
        assert_eq!(coins[2].rank, 7);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  PortfolioEntity & Statistic
// ═══════════════════════════════════════════════════════════════════

mod entity_and_statistic {
    use super::*;

    #[test]
    fn entity_new() {
        let e = PortfolioEntity::new("bitcoin", 1.25);
        assert_eq!(e.coin_id, "bitcoin");
        assert_eq!(e.amount, 1.25);
    }

    #[test]
    fn statistic_without_change() {
        let s = Statistic::new("24h Volume", "$50B");
        assert_eq!(s.title, "24h Volume");
        assert_eq!(s.value, "$50B");
        assert_eq!(s.percentage_change, None);
    }

    #[test]
    fn statistic_with_change() {
        let s = Statistic::with_change("Market Cap", "$1T", Some(2.5));
        assert_eq!(s.percentage_change, Some(2.5));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  SortOption
// ═══════════════════════════════════════════════════════════════════

mod sort_option {
    use super::*;

    #[test]
    fn default_is_holdings() {
        assert_eq!(SortOption::default(), SortOption::Holdings);
    }

    #[test]
    fn is_holdings() {
        assert!(SortOption::Holdings.is_holdings());
        assert!(SortOption::HoldingsReversed.is_holdings());
        assert!(!SortOption::Rank.is_holdings());
        assert!(!SortOption::PriceReversed.is_holdings());
    }

    #[test]
    fn toggling_active_column_flips_direction() {
        assert_eq!(SortOption::Rank.toggled(SortColumn::Rank), SortOption::RankReversed);
        assert_eq!(SortOption::RankReversed.toggled(SortColumn::Rank), SortOption::Rank);
        assert_eq!(SortOption::Price.toggled(SortColumn::Price), SortOption::PriceReversed);
        assert_eq!(
            SortOption::Holdings.toggled(SortColumn::Holdings),
            SortOption::HoldingsReversed
        );
    }

    #[test]
    fn toggling_other_column_selects_it() {
        assert_eq!(SortOption::RankReversed.toggled(SortColumn::Price), SortOption::Price);
        assert_eq!(SortOption::PriceReversed.toggled(SortColumn::Holdings), SortOption::Holdings);
        assert_eq!(SortOption::Holdings.toggled(SortColumn::Rank), SortOption::Rank);
    }

    #[test]
    fn column() {
        assert_eq!(SortOption::HoldingsReversed.column(), SortColumn::Holdings);
        assert_eq!(SortOption::Price.column(), SortColumn::Price);
    }

    #[test]
    fn display() {
        assert_eq!(SortOption::Rank.to_string(), "Rank");
        assert_eq!(SortOption::PriceReversed.to_string(), "Price (reversed)");
    }

    #[test]
    fn serde_roundtrip_name() {
        let json = serde_json::to_string(&SortOption::HoldingsReversed).unwrap();
        assert_eq!(json, "\"HoldingsReversed\"");
    }
}

// ═══════════════════════════════════════════════════════════════════
//  MarketSnapshot
// ═══════════════════════════════════════════════════════════════════

mod market {
    use super::*;

    fn global() -> GlobalMarketData {
        GlobalMarketData {
            total_market_cap: HashMap::from([
                ("usd".to_string(), 1_230_000_000_000.0),
                ("eur".to_string(), 1_100_000_000_000.0),
            ]),
            total_volume: HashMap::from([("usd".to_string(), 50_000_000_000.0)]),
            market_cap_percentage: HashMap::from([
                ("btc".to_string(), 40.1234),
                ("eth".to_string(), 18.0),
            ]),
            market_cap_change_percentage_24h_usd: 2.5,
        }
    }

    #[test]
    fn from_global_formats_values() {
        let snap = MarketSnapshot::from_global(&global(), "usd", "$");
        assert_eq!(snap.total_market_cap, "$1.23Tr");
        assert_eq!(snap.total_volume_24h, "$50.00Bn");
        assert_eq!(snap.btc_dominance_percentage, "40.12%");
        assert_eq!(snap.market_cap_change_percentage_24h, 2.5);
    }

    #[test]
    fn from_global_quote_currency_is_case_insensitive() {
        let snap = MarketSnapshot::from_global(&global(), "EUR", "€");
        assert_eq!(snap.total_market_cap, "€1.10Tr");
        // no EUR volume in the feed
        assert_eq!(snap.total_volume_24h, "");
    }

    #[test]
    fn from_global_empty_data() {
        let snap = MarketSnapshot::from_global(&GlobalMarketData::default(), "usd", "$");
        assert_eq!(snap.total_market_cap, "");
        assert_eq!(snap.total_volume_24h, "");
        assert_eq!(snap.btc_dominance_percentage, "");
        assert_eq!(snap.market_cap_change_percentage_24h, 0.0);
    }

    #[test]
    fn parses_global_envelope() {
        let json = r#"{
            "data": {
                "active_cryptocurrencies": 10000,
                "total_market_cap": {"usd": 2000000000000.0},
                "total_volume": {"usd": 75000000000.0},
                "market_cap_percentage": {"btc": 51.5},
                "market_cap_change_percentage_24h_usd": -0.75
            }
        }"#;
        let resp: GlobalDataResponse = serde_json::from_str(json).unwrap();
        let snap = MarketSnapshot::from_global(&resp.data, "usd", "$");
        assert_eq!(snap.total_market_cap, "$2.00Tr");
        assert_eq!(snap.total_volume_24h, "$75.00Bn");
        assert_eq!(snap.btc_dominance_percentage, "51.50%");
        assert_eq!(snap.market_cap_change_percentage_24h, -0.75);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Settings & HomeViewState
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.default_sort, SortOption::Holdings);
        assert_eq!(s.currency_symbol, "$");
        assert_eq!(s.quote_currency, "usd");
        assert_eq!(s.zero_baseline_change, ZeroBaselineChange::Zero);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let s = Settings::from_json(r#"{"default_sort":"Price","zero_baseline_change":"Absent"}"#)
            .unwrap();
        assert_eq!(s.default_sort, SortOption::Price);
        assert_eq!(s.zero_baseline_change, ZeroBaselineChange::Absent);
        assert_eq!(s.currency_symbol, "$");
    }

    #[test]
    fn json_roundtrip() {
        let s = Settings {
            currency_symbol: "€".into(),
            quote_currency: "eur".into(),
            ..Settings::default()
        };
        let back = Settings::from_json(&s.to_json().unwrap()).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn view_state_default_is_empty() {
        let v = HomeViewState::default();
        assert!(v.all_coins.is_empty());
        assert!(v.portfolio_coins.is_empty());
        assert!(v.statistics.is_empty());
        assert!(!v.is_loading);
        assert_eq!(v.sort_option, SortOption::Holdings);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Formatting
// ═══════════════════════════════════════════════════════════════════

mod formatting {
    use super::*;

    #[test]
    fn currency_small_values() {
        assert_eq!(currency_with_2_decimals(0.0, "$"), "$0.00");
        assert_eq!(currency_with_2_decimals(200.0, "$"), "$200.00");
        assert_eq!(currency_with_2_decimals(12.3456, "$"), "$12.35");
    }

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(currency_with_2_decimals(1234.5, "$"), "$1,234.50");
        assert_eq!(currency_with_2_decimals(1_000_000.0, "€"), "€1,000,000.00");
        assert_eq!(currency_with_2_decimals(999.999, "$"), "$1,000.00");
    }

    #[test]
    fn currency_negative() {
        assert_eq!(currency_with_2_decimals(-3.1, "$"), "-$3.10");
        assert_eq!(currency_with_2_decimals(-0.001, "$"), "$0.00");
    }

    #[test]
    fn abbreviations() {
        assert_eq!(with_abbreviations(12.0), "12.00");
        assert_eq!(with_abbreviations(1_500.0), "1.50K");
        assert_eq!(with_abbreviations(2_340_000.0), "2.34M");
        assert_eq!(with_abbreviations(50_000_000_000.0), "50.00Bn");
        assert_eq!(with_abbreviations(1_000_000_000_000.0), "1.00Tr");
        assert_eq!(with_abbreviations(-1_500.0), "-1.50K");
    }

    #[test]
    fn percent() {
        assert_eq!(percent_string(40.123), "40.12%");
        assert_eq!(percent_string(-2.5), "-2.50%");
    }
}

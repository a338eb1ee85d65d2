//! Composite trend scoring.

use quant_core::{TechnicalIndicators, TrendSignal};

/// Additive trend score over the computed indicators, clamped to
/// [-100, 100], with its categorical signal.
///
/// Moving-average stacking contributes up to ±30, MACD up to ±25,
/// RSI(14) up to ±25 and the KDJ J value up to ±20. Indicators still
/// absent at the current series length contribute nothing.
pub(crate) fn trend_score(current_price: f64, ind: &TechnicalIndicators) -> (i32, TrendSignal) {
    let mut score = 0i32;

    // Moving-average stacking
    if let (Some(ma5), Some(ma10), Some(ma20)) = (ind.ma5, ind.ma10, ind.ma20) {
        if current_price > ma5 && ma5 > ma10 && ma10 > ma20 {
            score += 30; // full bullish stack
        } else if current_price > ma5 && ma5 > ma10 {
            score += 20;
        } else if current_price > ma5 {
            score += 10;
        } else if current_price < ma5 && ma5 < ma10 && ma10 < ma20 {
            score -= 30; // full bearish stack
        } else if current_price < ma5 && ma5 < ma10 {
            score -= 20;
        } else if current_price < ma5 {
            score -= 10;
        }
    }

    // MACD histogram sign and line-vs-signal position
    if let Some(hist) = ind.macd_hist {
        if hist > 0.0 {
            score += if hist > 0.01 { 15 } else { 10 };
        } else {
            score -= if hist < -0.01 { 15 } else { 10 };
        }

        if let (Some(line), Some(signal)) = (ind.macd, ind.macd_signal) {
            if line > signal {
                score += 10;
            } else {
                score -= 10;
            }
        }
    }

    // RSI overbought/oversold zones
    if let Some(rsi) = ind.rsi14 {
        if rsi > 70.0 {
            score -= 25;
        } else if rsi > 60.0 {
            score -= 10;
        } else if rsi < 30.0 {
            score += 25;
        } else if rsi < 40.0 {
            score += 10;
        }
    }

    // KDJ J extremes
    if let Some(j) = ind.kdj_j {
        if j > 100.0 {
            score -= 20;
        } else if j > 80.0 {
            score -= 10;
        } else if j < 0.0 {
            score += 20;
        } else if j < 20.0 {
            score += 10;
        }
    }

    let score = score.clamp(-100, 100);
    (score, signal_for(score))
}

fn signal_for(score: i32) -> TrendSignal {
    if score >= 60 {
        TrendSignal::StrongBuy
    } else if score >= 30 {
        TrendSignal::Buy
    } else if score >= -30 {
        TrendSignal::Hold
    } else if score >= -60 {
        TrendSignal::Sell
    } else {
        TrendSignal::StrongSell
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullish_stack_scores_high() {
        let ind = TechnicalIndicators {
            ma5: Some(105.0),
            ma10: Some(103.0),
            ma20: Some(100.0),
            macd: Some(1.0),
            macd_signal: Some(0.5),
            macd_hist: Some(0.5),
            rsi14: Some(25.0),
            kdj_j: Some(-5.0),
            ..Default::default()
        };

        // 30 (stack) + 15 + 10 (MACD) + 25 (RSI oversold) + 20 (KDJ)
        let (score, signal) = trend_score(110.0, &ind);
        assert_eq!(score, 100);
        assert_eq!(signal, TrendSignal::StrongBuy);
    }

    #[test]
    fn test_bearish_stack_scores_low() {
        let ind = TechnicalIndicators {
            ma5: Some(95.0),
            ma10: Some(97.0),
            ma20: Some(100.0),
            macd: Some(-1.0),
            macd_signal: Some(-0.5),
            macd_hist: Some(-0.5),
            rsi14: Some(75.0),
            kdj_j: Some(105.0),
            ..Default::default()
        };

        // -30 - 15 - 10 - 25 - 20 = -100
        let (score, signal) = trend_score(90.0, &ind);
        assert_eq!(score, -100);
        assert_eq!(signal, TrendSignal::StrongSell);
    }

    #[test]
    fn test_small_histogram_scores_less() {
        let ind = TechnicalIndicators {
            macd: Some(0.505),
            macd_signal: Some(0.5),
            macd_hist: Some(0.005),
            ..Default::default()
        };

        // 10 (hist in (0, 0.01]) + 10 (line above signal)
        let (score, signal) = trend_score(100.0, &ind);
        assert_eq!(score, 20);
        assert_eq!(signal, TrendSignal::Hold);
    }

    #[test]
    fn test_absent_indicators_contribute_nothing() {
        let (score, signal) = trend_score(100.0, &TechnicalIndicators::default());
        assert_eq!(score, 0);
        assert_eq!(signal, TrendSignal::Hold);
    }

    #[test]
    fn test_signal_thresholds() {
        assert_eq!(signal_for(60), TrendSignal::StrongBuy);
        assert_eq!(signal_for(59), TrendSignal::Buy);
        assert_eq!(signal_for(30), TrendSignal::Buy);
        assert_eq!(signal_for(29), TrendSignal::Hold);
        assert_eq!(signal_for(-30), TrendSignal::Hold);
        assert_eq!(signal_for(-31), TrendSignal::Sell);
        assert_eq!(signal_for(-60), TrendSignal::Sell);
        assert_eq!(signal_for(-61), TrendSignal::StrongSell);
    }

    #[test]
    fn test_rsi_intermediate_zones() {
        let overbought_leaning = TechnicalIndicators {
            rsi14: Some(65.0),
            ..Default::default()
        };
        assert_eq!(trend_score(100.0, &overbought_leaning).0, -10);

        let oversold_leaning = TechnicalIndicators {
            rsi14: Some(35.0),
            ..Default::default()
        };
        assert_eq!(trend_score(100.0, &oversold_leaning).0, 10);
    }
}

/// Raw texts collected per channel for one symbol.
#[derive(Debug, Clone)]
pub struct ChannelFeeds {
    pub reddit: Vec<String>,
    pub tweets: Vec<String>,
    pub news: Vec<String>,
}

/// Template texts standing in for live channel feeds. Real sourcing
/// (scraping, feed polling) is an upstream concern; anything supplying a
/// `ChannelFeeds` can drive the aggregator.
pub fn sample_feeds(symbol: &str) -> ChannelFeeds {
    let reddit = vec![
        format!("{symbol} looking bullish with strong quarterly results"),
        format!("Bought more {symbol} on the dip, fundamental story remains strong"),
        format!("{symbol} management guidance looks positive for next quarter"),
    ];

    let tweets = vec![
        format!("{symbol} breaking resistance levels with good volume"),
        format!("{symbol} institutional buying spotted, price target raised"),
        format!("Sector rotation favoring {symbol} type stocks"),
    ];

    let news = vec![
        format!("{symbol} Reports Strong Q3 Results, Beats Street Estimates by 15%"),
        format!("Brokerages Upgrade {symbol} Price Target After Results"),
        format!("{symbol} Announces Strategic Partnership with Government Initiative"),
    ];

    ChannelFeeds {
        reddit,
        tweets,
        news,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feeds_cover_all_three_channels() {
        let feeds = sample_feeds("RELIANCE");
        assert_eq!(feeds.reddit.len(), 3);
        assert_eq!(feeds.tweets.len(), 3);
        assert_eq!(feeds.news.len(), 3);
        assert!(feeds.reddit.iter().all(|t| t.contains("RELIANCE")));
    }
}

use crate::feeds::ChannelFeeds;

/// Trims and filters feed texts so only non-empty inputs reach the
/// classifier.
pub fn normalize_all(feeds: &mut ChannelFeeds) {
    normalize_channel(&mut feeds.reddit);
    normalize_channel(&mut feeds.tweets);
    normalize_channel(&mut feeds.news);
}

fn normalize_channel(texts: &mut Vec<String>) {
    for text in texts.iter_mut() {
        *text = text.trim().to_string();
    }
    texts.retain(|t| !t.is_empty());
}

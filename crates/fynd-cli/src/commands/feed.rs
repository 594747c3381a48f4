use anyhow::{Context, Result};
use fynd_application::{CandidateFeed, FeedState, SwipeDeck};
use fynd_core::matching::{CandidateSelector, Ranker};
use fynd_core::swipe::SwipeEvent;
use fynd_infrastructure::SeedData;
use std::path::Path;
use std::sync::Arc;

const SWIPE_DISTANCE_FACTOR: f32 = 1.5;

pub async fn run(config: Option<&Path>, seed: &Path, user: &str, swipes: usize) -> Result<()> {
    let config = super::config::load(config);
    let store = Arc::new(
        SeedData::load(seed)
            .with_context(|| format!("Failed to load seed {}", seed.display()))?
            .into_store(),
    );

    let selector = Arc::new(CandidateSelector::new(
        store,
        Ranker::new(config.ranking.clone()),
    ));
    let feed = Arc::new(CandidateFeed::new(selector));
    feed.refresh(user)
        .await
        .with_context(|| format!("Failed to fetch candidates for {}", user))?;

    match feed.state().await {
        FeedState::ProfileIncomplete => {
            println!("⚠️  {} has no gender or language yet; nothing to show", user);
            return Ok(());
        }
        FeedState::NoMoreProfiles | FeedState::Loading => {
            println!("No more profiles");
            return Ok(());
        }
        FeedState::Ready { remaining } => println!("📋 {} candidates for {}", remaining, user),
    }

    for (position, candidate) in feed.snapshot().await.iter().enumerate() {
        println!(
            "  {:>2}. {:<12} {:<20} age {:>3}  {:<10} score {:>3}  [{}]",
            position + 1,
            candidate.id,
            candidate.name,
            candidate.age,
            candidate.language,
            candidate.match_score,
            candidate.avatar
        );
    }

    if swipes == 0 {
        return Ok(());
    }

    let deck = SwipeDeck::new(feed, &config.swipe);
    deck.bind().await;
    let mut events = deck.subscribe();
    let distance = config.swipe.commit_threshold * SWIPE_DISTANCE_FACTOR;

    for index in 0..swipes {
        let dx = if index % 2 == 0 { distance } else { -distance };
        if let Err(err) = deck.swipe(dx).await {
            tracing::debug!(error = %err, "Swipe rejected");
            break;
        }
    }

    while let Ok(event) = events.try_recv() {
        match event {
            SwipeEvent::Swiped {
                candidate_id,
                direction,
            } => println!("  ✓ swiped {:?} on {}", direction, candidate_id),
            SwipeEvent::Cancelled => println!("  ↺ cancelled"),
            SwipeEvent::Exhausted => println!("No more profiles"),
        }
    }
    Ok(())
}

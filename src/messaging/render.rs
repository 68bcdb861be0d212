use crate::game::{Card, Notice, PlayerId};

fn mentions(players: &[PlayerId]) -> String {
    players
        .iter()
        .map(PlayerId::mention)
        .collect::<Vec<_>>()
        .join(", ")
}

fn card_list(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Chat text for a notice.
pub fn render_notice(notice: &Notice) -> String {
    match notice {
        Notice::TurnOrder(roster) => format!("Turn order: {}", mentions(roster)),
        Notice::Hand(cards) if cards.is_empty() => "Your hand is empty".to_string(),
        Notice::Hand(cards) => format!("Your hand: {}", card_list(cards)),
        Notice::HandSent => "Sent you your hand".to_string(),
        Notice::Played(card) => format!("{} was played", card),
        Notice::Won(player) => format!("{} won!", player.mention()),
        Notice::CardReturned => "Your card was put back into your hand".to_string(),
        Notice::Drew { player, count } => {
            let noun = if *count == 1 { "card" } else { "cards" };
            format!("{} drew {} {}", player.mention(), count, noun)
        }
        Notice::Left {
            player,
            replacement: None,
        } => format!("{} left the game", player.mention()),
        Notice::Left {
            player,
            replacement: Some(replacement),
        } => format!(
            "{} left the game for {}",
            player.mention(),
            replacement.mention()
        ),
        Notice::Kicked {
            target,
            replacement: None,
        } => format!("{} was kicked from the game", target.mention()),
        Notice::Kicked {
            target,
            replacement: Some(replacement),
        } => format!(
            "{} was kicked from the game and replaced by {}",
            target.mention(),
            replacement.mention()
        ),
        Notice::Abandoned => "Everyone left, the game is over".to_string(),
    }
}

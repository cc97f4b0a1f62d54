//! Canned guidance texts and the (sign, archetype) resolver.
//!
//! The table is an explicit two-level mapping: sign → archetype → text.
//! [`guidance`] is total — a pair missing from the table resolves to a
//! fallback template naming both labels, never to an error.

use crate::{archetype::Archetype, sign::SunSign};

// ─── Resolver ────────────────────────────────────────────────────────────────

/// Resolve the guidance text for a (sign, archetype) pair.
///
/// Tabulated pairs return their canned text verbatim; anything else — the
/// [`SunSign::Unknown`] sentinel included — falls back to a generic
/// trust-your-design message naming both labels.
pub fn guidance(sign: SunSign, archetype: Archetype) -> String {
  match canned(sign, archetype) {
    Some(text) => text.to_owned(),
    None => format!(
      "As a {sign} {archetype}, you blend {sign}'s traits with {archetype} \
       energy. Trust your design's wisdom."
    ),
  }
}

/// The canned entry for a pair, if tabulated.
fn canned(sign: SunSign, archetype: Archetype) -> Option<&'static str> {
  GUIDANCE
    .iter()
    .find(|(s, _)| *s == sign)
    .and_then(|(_, by_archetype)| {
      by_archetype
        .iter()
        .find(|(a, _)| *a == archetype)
        .map(|(_, text)| *text)
    })
}

// ─── Table ───────────────────────────────────────────────────────────────────

type SignEntry = (SunSign, [(Archetype, &'static str); 4]);

/// 12 signs × 4 archetypes of canned guidance.
const GUIDANCE: [SignEntry; 12] = [
  (SunSign::Aries, [
    (Archetype::Generator, "As an Aries Generator, your fiery energy is best channeled when responding to life's challenges. Wait for opportunities that excite you before taking action."),
    (Archetype::Projector, "As an Aries Projector, your natural leadership can shine when you're invited. Be patient and use your fiery insight to guide others."),
    (Archetype::Manifestor, "As an Aries Manifestor, you're a powerful initiator. Channel your fiery energy wisely and inform others before making big moves."),
    (Archetype::Reflector, "As an Aries Reflector, you reflect the fiery energy around you. Take your time (a full lunar cycle) before making important decisions."),
  ]),
  (SunSign::Taurus, [
    (Archetype::Generator, "As a Taurus Generator, your earthy stability brings consistent value when you respond to what feels right. Trust your body's signals."),
    (Archetype::Projector, "As a Taurus Projector, your practical guidance is valuable when recognized. Wait for invitation before offering your grounded wisdom."),
    (Archetype::Manifestor, "As a Taurus Manifestor, you can initiate stable, valuable projects. Inform others before making moves to ensure smooth implementation."),
    (Archetype::Reflector, "As a Taurus Reflector, you sense the grounded energy around you. Take your time (a full lunar cycle) before making material decisions."),
  ]),
  (SunSign::Gemini, [
    (Archetype::Generator, "As a Gemini Generator, your curious energy flows best when responding to intellectual stimulation. Follow what genuinely excites you."),
    (Archetype::Projector, "As a Gemini Projector, your communication skills shine when recognized. Wait for invitation before sharing your diverse knowledge."),
    (Archetype::Manifestor, "As a Gemini Manifestor, you're designed to initiate conversations and connections. Inform others before launching new communication channels."),
    (Archetype::Reflector, "As a Gemini Reflector, you sample the communicative energy around you. Take a full lunar cycle before making decisions about important connections."),
  ]),
  (SunSign::Cancer, [
    (Archetype::Generator, "As a Cancer Generator, your nurturing energy flows best when responding to emotional connections. Trust your intuitive signals."),
    (Archetype::Projector, "As a Cancer Projector, your emotional wisdom guides others when recognized. Wait for invitation before offering your nurturing support."),
    (Archetype::Manifestor, "As a Cancer Manifestor, you can initiate supportive environments. Remember to inform others before making emotional or home-related moves."),
    (Archetype::Reflector, "As a Cancer Reflector, you sense the nurturing energy around you. Take a full lunar cycle before making important family decisions."),
  ]),
  (SunSign::Leo, [
    (Archetype::Generator, "As a Leo Generator, your creative energy thrives when you respond to what lights your heart on fire. Follow your sacral response."),
    (Archetype::Projector, "As a Leo Projector, your ability to guide others shines when you're recognized. Wait for the right invitation to share your creative gifts."),
    (Archetype::Manifestor, "As a Leo Manifestor, you're designed to initiate creative projects. Remember to inform others before making big moves to avoid resistance."),
    (Archetype::Reflector, "As a Leo Reflector, you mirror the creative energy around you. Give yourself time to process before making important decisions."),
  ]),
  (SunSign::Virgo, [
    (Archetype::Generator, "As a Virgo Generator, your detail-oriented energy is best utilized when responding to what truly feels right. Wait for the correct opportunity."),
    (Archetype::Projector, "As a Virgo Projector, your analytical mind can guide others when recognized. Wait for invitation before offering your practical solutions."),
    (Archetype::Manifestor, "As a Virgo Manifestor, your precise plans can create excellent systems. Remember to inform others before implementing your detailed ideas."),
    (Archetype::Reflector, "As a Virgo Reflector, you absorb the analytical energy around you. Take a full lunar cycle before finalizing important analytical decisions."),
  ]),
  (SunSign::Libra, [
    (Archetype::Generator, "As a Libra Generator, your harmonious energy works best when responding to balanced opportunities. Trust your body's signals about relationships."),
    (Archetype::Projector, "As a Libra Projector, your diplomatic abilities are valuable when recognized. Wait for invitation before offering your balanced perspective."),
    (Archetype::Manifestor, "As a Libra Manifestor, you can initiate harmonious connections. Remember to inform others before making relationship moves."),
    (Archetype::Reflector, "As a Libra Reflector, you sense the relational energy around you. Take a full lunar cycle before making important partnership decisions."),
  ]),
  (SunSign::Scorpio, [
    (Archetype::Generator, "As a Scorpio Generator, your transformative energy is powerful when responding to deep connections. Trust your intense gut reactions."),
    (Archetype::Projector, "As a Scorpio Projector, your penetrating insights are valuable when recognized. Wait for invitation before sharing your transformative wisdom."),
    (Archetype::Manifestor, "As a Scorpio Manifestor, you're designed to initiate powerful change. Inform others before making moves that impact shared resources."),
    (Archetype::Reflector, "As a Scorpio Reflector, you sample the transformative energy around you. Take a full lunar cycle before committing to major life changes."),
  ]),
  (SunSign::Sagittarius, [
    (Archetype::Generator, "As a Sagittarius Generator, your quest for knowledge and adventure is best guided by your sacral response. Wait for what truly excites you."),
    (Archetype::Projector, "As a Sagittarius Projector, your visionary wisdom is best shared when invited. Wait for recognition before offering your expansive perspective."),
    (Archetype::Manifestor, "As a Sagittarius Manifestor, your adventurous spirit needs freedom to initiate. Remember to inform others of your plans to maintain harmony."),
    (Archetype::Reflector, "As a Sagittarius Reflector, you sample the adventurous energy around you. Give yourself a full lunar cycle before committing to major journeys."),
  ]),
  (SunSign::Capricorn, [
    (Archetype::Generator, "As a Capricorn Generator, your ambitious energy finds success when responding to genuine opportunities. Trust your gut reaction."),
    (Archetype::Projector, "As a Capricorn Projector, your structural wisdom is powerful when recognized. Wait for the right invitation to share your strategic insights."),
    (Archetype::Manifestor, "As a Capricorn Manifestor, you're built to initiate organized systems. Inform others before making big moves to ensure cooperation."),
    (Archetype::Reflector, "As a Capricorn Reflector, you sense the ambitious energy around you. Take a full lunar cycle before committing to major career decisions."),
  ]),
  (SunSign::Aquarius, [
    (Archetype::Generator, "As an Aquarius Generator, your innovative energy thrives when responding to what genuinely excites your originality. Trust your unique response."),
    (Archetype::Projector, "As an Aquarius Projector, your visionary perspective is powerful when recognized. Wait for invitation before sharing your revolutionary ideas."),
    (Archetype::Manifestor, "As an Aquarius Manifestor, you're built to initiate progressive change. Inform others before launching your innovative projects."),
    (Archetype::Reflector, "As an Aquarius Reflector, you sample the revolutionary energy around you. Take a full lunar cycle before committing to social causes."),
  ]),
  (SunSign::Pisces, [
    (Archetype::Generator, "As a Pisces Generator, your intuitive energy flows best when responding to spiritual connections. Follow what genuinely moves your soul."),
    (Archetype::Projector, "As a Pisces Projector, your spiritual wisdom guides others when recognized. Wait for invitation before sharing your compassionate vision."),
    (Archetype::Manifestor, "As a Pisces Manifestor, you can initiate creative and spiritual projects. Remember to inform others before diving into new mystical waters."),
    (Archetype::Reflector, "As a Pisces Reflector, you absorb the spiritual energy around you. Take a full lunar cycle before making decisions about your intuitive path."),
  ]),
];

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn resolver_is_total() {
    let mut signs = SunSign::ALL.to_vec();
    signs.push(SunSign::Unknown);

    for sign in signs {
      for archetype in Archetype::ALL {
        assert!(!guidance(sign, archetype).is_empty(), "{sign}/{archetype}");
      }
    }
  }

  #[test]
  fn all_48_pairs_hit_the_table() {
    for sign in SunSign::ALL {
      for archetype in Archetype::ALL {
        let expected = canned(sign, archetype)
          .unwrap_or_else(|| panic!("no entry for {sign}/{archetype}"));
        assert_eq!(guidance(sign, archetype), expected);
      }
    }
  }

  #[test]
  fn tabulated_pair_returns_canned_text_verbatim() {
    assert_eq!(
      guidance(SunSign::Capricorn, Archetype::Projector),
      "As a Capricorn Projector, your structural wisdom is powerful when \
       recognized. Wait for the right invitation to share your strategic \
       insights."
    );
  }

  #[test]
  fn untabulated_pair_falls_back_naming_both_labels() {
    for archetype in Archetype::ALL {
      let text = guidance(SunSign::Unknown, archetype);
      assert!(text.contains("Unknown"), "{text}");
      assert!(text.contains(archetype.as_str()), "{text}");
      assert!(text.contains("Trust your design's wisdom"), "{text}");
    }
  }
}

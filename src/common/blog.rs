pub struct BlogPost {
    /// Element id of the post on the splash page.
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub content: &'static [&'static str],
}

pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "entangled-photon-smartwatch",
        title: "How an Entangled-Photon Smartwatch Could Actually Work",
        summary: "A practical tour of the nonlinear optics and integrated photonics we use in Pebble.",
        content: &[
            "When Stephen Quinn lifted his wrist on stage, the audience saw a polished smartwatch. Inside that quiet shell sits the Pebble, an engineered crystal whose nuclei are coaxed into emitting paired photons on demand. Those photons are born entangled, sharing a single quantum state until measurement, the same phenomenon Einstein called ‘spooky action at a distance.’",
            "Traditional Bell test rigs sprawl across basements and mountaintops. In Pebble, we shrink the experiment into a bead cooled, shielded, and driven by on-wrist power electronics. The neural interface only unlocks when the wearer is calm, tightening the safety envelope so entanglement requests are gated by physiology, not just firmware toggles.",
            "As those photons travel through integrated photonics, tiny drive channels tune polarization and phase so the lattice stays coherent. The result is a wearable that can bias remote Anchor Matter without broadcasting radio commands: intent encoded into entangled light, translated by an AI that listens for steadiness instead of keywords.",
        ],
    },
    BlogPost {
        slug: "faster-than-light-consistency",
        title: "Faster-Than-Light Without Paradoxes?",
        summary: "What ‘self-consistent’ really means when you're pushing on causality.",
        content: &[
            "The keynote framed our drive channel as ‘pushing here, it moves there.’ That line lands because the entangled photons inside each Pebble maintain correlations regardless of distance: a meter or a million kilometers doesn’t change the link quality. What keeps that from becoming a time machine is self-consistency. We’re not sending classical bits faster than light; we’re steering probability within the allowed envelope.",
            "Every entanglement request is paired with local verification. The calm channel locks the interface unless the wearer’s vitals signal steadiness, so intent arrives as a low-noise vector instead of a scrambled shout. When the paired lattice feels that vector, it nudges outcomes toward the observed state, but only within margins that won’t violate causality. You get faster-than-light correlation, not faster-than-light signaling.",
            "That’s why Stephen could demonstrate long-haul responsiveness on stage without collapsing the keynote into paradoxes. We ride quantum nonlocality to deliver coherence, then let classical physics enforce the limits.",
        ],
    },
    BlogPost {
        slug: "anchor-matter-self-healing",
        title: "Anchor Matter and the Future of Self-Healing Infrastructure",
        summary: "How active materials and quantum randomness can keep critical systems in one piece.",
        content: &[
            "When a hairline fracture in the hall’s decorative glass softened mid-keynote, the safety logs stayed clear: no collider, no actuator, just a quiet intent vector. Anchor Matter is the receiving half of that story. Materials seeded with qE lattice sites become slightly more likely to adopt the state the observer is calmly watching for: a crack holding instead of spreading, a bridge cable settling instead of snapping.",
            "The process isn’t brute force. Anchor Matter rides the same quantum randomness that forms micro-fractures in the first place, adding a tiny bias toward structural integrity. The Pebble listens for the wearer’s calm attention, encodes that direction into entangled photons, and the paired Anchor sites feel a probabilistic lean toward repair.",
            "For infrastructure, that means distributed self-healing without heavy machinery: materials that notice stress, respond to human oversight, and quietly reinforce themselves before failure cascades. It’s preventive maintenance embedded in the matter itself.",
        ],
    },
];

pub fn find_post(slug: &str) -> Option<&'static BlogPost> {
    BLOG_POSTS.iter().find(|post| post.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slugs_are_unique_ids() {
        let slugs: HashSet<&str> = BLOG_POSTS.iter().map(|p| p.slug).collect();
        assert_eq!(slugs.len(), BLOG_POSTS.len());
        assert!(BLOG_POSTS
            .iter()
            .all(|p| p.slug.chars().all(|c| c.is_ascii_lowercase() || c == '-')));
    }

    #[test]
    fn every_post_has_body() {
        for post in BLOG_POSTS {
            assert!(!post.content.is_empty(), "{} has no paragraphs", post.slug);
        }
    }

    #[test]
    fn lookup_by_slug() {
        let post = find_post("faster-than-light-consistency").unwrap();
        assert_eq!(post.title, "Faster-Than-Light Without Paradoxes?");
        assert!(find_post("perpetual-motion").is_none());
    }
}

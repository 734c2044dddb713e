mod common;

use common::*;

#[test]
fn tags_follow_first_seen_order() {
    let env = TestEnv::with_sample_catalog();

    let result = env.run(&["--json", "tags"]);
    assert!(result.success, "{}", result.combined_output());

    let events = result.json_lines();
    let names: Vec<&str> = events[0]["tags"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["tag"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            "AI",
            "Image",
            "Chatbot",
            "Utility",
            "Weather",
            "Editor",
            "Drawing",
            "Quiz",
            "Chat",
            "Decentralized"
        ]
    );
    assert_eq!(events[0]["total"], 9);
    assert_eq!(events[0]["tags"][0]["count"], 3);
    assert_eq!(events[0]["tags"][3]["count"], 3);
}

#[test]
fn text_output_puts_all_first() {
    let env = TestEnv::with_sample_catalog();

    let result = env.run(&["tags"]);
    assert!(result.success, "{}", result.combined_output());
    let first = result.stdout.lines().next().unwrap();
    assert_eq!(first, "(*) All (9)");
    assert!(result.stdout.contains("( ) Decentralized (1)"));
}

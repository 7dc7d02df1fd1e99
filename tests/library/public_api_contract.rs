use promptide::app::api;
use promptide::{
    AppContext, AppError, CapabilityCatalog, Conversation, InterfaceType, MemoryDocumentStore,
    Model, ModelSwitch, Parameter, ParameterEngine, ParameterError, ParameterValue, Prompt,
    PromptideConfig, YamlCapabilityCatalog, YamlPromptCodec,
};

#[test]
fn public_api_edit_session_contract() {
    let catalog = YamlCapabilityCatalog::embedded().expect("embedded catalog loads");

    let prompt = ModelSwitch::create_default_prompt(&catalog, InterfaceType::Chat).unwrap();
    assert_eq!(prompt.model(), &Model::new("Anthropic", "claude-3-5-sonnet"));

    let prompt = ParameterEngine::change(&prompt, &catalog, "temperature", 0.4).unwrap();
    let prompt = ParameterEngine::enable(&prompt, &catalog, "max_tokens").unwrap();
    assert_eq!(
        prompt.parameters(),
        &[Parameter::new("temperature", 0.4), Parameter::new("max_tokens", 1024)]
    );

    let err = ParameterEngine::remove(&prompt, &catalog, "max_tokens").unwrap_err();
    assert!(matches!(err, AppError::Parameter(ParameterError::RequiredParameterRemoval { .. })));

    let moved = ModelSwitch::reset_model(&prompt, &catalog, "text-bison-001").unwrap();
    assert_eq!(moved.kind(), InterfaceType::Completion);
    assert_eq!(moved.model().vendor, "Google");
    let (_, model) = catalog.require_model("text-bison-001").unwrap();
    assert!(moved.parameters().iter().all(|p| model.parameter(&p.name).is_some()));
    assert_eq!(
        moved.parameter("temperature").map(|p| &p.value),
        Some(&ParameterValue::Number(0.4))
    );
}

#[test]
fn public_api_document_round_trip_contract() {
    let ctx = AppContext::new(
        YamlCapabilityCatalog::embedded().unwrap(),
        MemoryDocumentStore::new(),
        PromptideConfig::default(),
    );

    api::create_prompt(&ctx, "doc.yml", Some(InterfaceType::Chat), false).unwrap();
    api::add_message(&ctx, "doc.yml", Conversation::new("Hi").with_output("Hello"), None, false)
        .unwrap();
    api::set_parameter(&ctx, "doc.yml", "temperature", "0.9").unwrap();

    let summary = api::describe_prompt(&ctx, "doc.yml").unwrap();
    assert_eq!(summary.turns, 1);
    assert!(summary.parameters.iter().any(|s| s.name == "temperature" && s.is_enabled()));

    let loaded: Prompt = api::load_prompt(&ctx, "doc.yml").unwrap();
    let text = YamlPromptCodec.encode(&loaded).unwrap();
    assert_eq!(YamlPromptCodec.decode(&text).unwrap(), loaded);
}

#[test]
fn public_api_conversion_is_lossy_one_way() {
    let catalog = YamlCapabilityCatalog::embedded().unwrap();
    let prompt = ModelSwitch::create_default_prompt(&catalog, InterfaceType::Completion).unwrap();
    let Prompt::Completion(completion) = prompt else { panic!("expected completion") };
    let completion = completion.with_text("Tell me a story");

    let chat = completion.to_chat();
    assert_eq!(chat.to_completion().prompt, "Tell me a story");

    let chat = chat.with_message_inserted(1, Conversation::new("and another")).unwrap();
    let back = chat.to_completion().to_chat();
    assert_eq!(back.messages.len(), 1);
    assert_eq!(chat.completion_conversion_loss().messages, 1);
}

use super::preview::Rewrite;
use super::reference::{PatternCategory, PatternGroup};

pub const STARTER: &str = r#"<template>
  <div class="p-4">
    <h1 class="text-2xl font-bold mb-4">{{ title }}</h1>
    <p class="mb-4">Count: {{ count }}</p>
    <button
      @click="increment"
      class="bg-green-500 text-white px-4 py-2 rounded hover:bg-green-600 mr-2"
    >
      Increment
    </button>
    <button
      @click="reset"
      class="bg-gray-500 text-white px-4 py-2 rounded hover:bg-gray-600"
    >
      Reset
    </button>
    <ul class="mt-4">
      <li v-for="item in items" :key="item.id" class="py-1">
        {{ item.name }}
      </li>
    </ul>
  </div>
</template>

<script>
export default {
  name: 'MyComponent',
  data() {
    return {
      title: 'Vue Component',
      count: 0,
      items: [
        { id: 1, name: 'Item 1' },
        { id: 2, name: 'Item 2' },
        { id: 3, name: 'Item 3' }
      ]
    }
  },
  methods: {
    increment() {
      this.count++;
    },
    reset() {
      this.count = 0;
    }
  }
}
</script>

<style scoped>
button {
  transition: all 0.2s;
}
</style>"#;

pub const TEMPLATE_BLOCK: &str = r"(?s)<template>(.*?)</template>";
pub const SCRIPT_BLOCK: &str = r"(?s)<script>(.*?)</script>";
pub const COMPONENT_DEFINITION: &str = r"(?s)export default\s*\{(.*)\}";

pub const REWRITES: &[Rewrite] = &[
    Rewrite {
        pattern: r"\{\{\s*([^}]+)\s*\}\}",
        replacement: r#"<span class="text-green-600 font-mono">{{ $1 }}</span>"#,
    },
    Rewrite {
        pattern: r#"v-for="[^"]*""#,
        replacement: r#"class="bg-yellow-100 px-2 py-1 rounded""#,
    },
    Rewrite {
        pattern: r#"v-if="[^"]*""#,
        replacement: r#"class="bg-blue-100 px-2 py-1 rounded""#,
    },
    Rewrite {
        pattern: r#"@click="[^"]*""#,
        replacement: r#"data-event="click" class="cursor-pointer""#,
    },
];

pub const REFERENCE: &[PatternCategory] = &[
    PatternCategory {
        name: "Template Syntax",
        groups: &[
            PatternGroup {
                name: "Interpolation",
                patterns: &["{{ message }}", "{{ count + 1 }}", "{{ user.name }}"],
            },
            PatternGroup {
                name: "Directives",
                patterns: &[
                    r#"v-if="condition""#,
                    r#"v-for="item in items""#,
                    r#"v-show="visible""#,
                    r#"v-model="data""#,
                ],
            },
            PatternGroup {
                name: "Event Handling",
                patterns: &[
                    r#"@click="method""#,
                    r#"@submit.prevent="onSubmit""#,
                    r#"@keyup.enter="search""#,
                ],
            },
            PatternGroup {
                name: "Attribute Binding",
                patterns: &[
                    r#":class="{ active: isActive }""#,
                    r#":style="{ color: textColor }""#,
                    r#":href="url""#,
                ],
            },
        ],
    },
    PatternCategory {
        name: "Composition API",
        groups: &[
            PatternGroup {
                name: "Reactive Data",
                patterns: &["ref()", "reactive()", "computed()", "watch()"],
            },
            PatternGroup {
                name: "Lifecycle",
                patterns: &["onMounted()", "onUnmounted()", "onUpdated()", "onBeforeMount()"],
            },
            PatternGroup {
                name: "Setup Function",
                patterns: &[
                    "setup() { return { } }",
                    "const count = ref(0)",
                    "const state = reactive({})",
                ],
            },
        ],
    },
    PatternCategory {
        name: "Options API",
        groups: &[
            PatternGroup {
                name: "Data",
                patterns: &[
                    "data() { return {} }",
                    r#"props: ["title"]"#,
                    "computed: { fullName() {} }",
                ],
            },
            PatternGroup {
                name: "Methods",
                patterns: &[
                    "methods: { onClick() {} }",
                    "this.property",
                    r#"this.$emit("event")"#,
                ],
            },
            PatternGroup {
                name: "Lifecycle Hooks",
                patterns: &["mounted() {}", "created() {}", "beforeDestroy() {}", "updated() {}"],
            },
        ],
    },
    PatternCategory {
        name: "Components",
        groups: &[
            PatternGroup {
                name: "Registration",
                patterns: &[
                    "components: { MyComponent }",
                    r#"app.component("my-component", {})"#,
                    "defineComponent({})",
                ],
            },
            PatternGroup {
                name: "Props",
                patterns: &[
                    "props: { title: String }",
                    "props: { count: { type: Number, default: 0 } }",
                ],
            },
            PatternGroup {
                name: "Emits",
                patterns: &[
                    r#"emits: ["update"]"#,
                    r#"this.$emit("update", value)"#,
                    r#"defineEmits(["update"])"#,
                ],
            },
            PatternGroup {
                name: "Slots",
                patterns: &["<slot></slot>", r#"<slot name="header"></slot>"#, "v-slot:header"],
            },
        ],
    },
    PatternCategory {
        name: "Reactivity",
        groups: &[
            PatternGroup {
                name: "Refs",
                patterns: &["ref(0)", "isRef()", "unref()", "toRef()", "toRefs()"],
            },
            PatternGroup {
                name: "Reactive",
                patterns: &["reactive({})", "readonly()", "shallowReactive()", "markRaw()"],
            },
            PatternGroup {
                name: "Computed",
                patterns: &["computed(() => {})", "computed({ get() {}, set() {} })"],
            },
            PatternGroup {
                name: "Watch",
                patterns: &[
                    "watch(source, callback)",
                    "watchEffect(() => {})",
                    "watch([a, b], callback)",
                ],
            },
        ],
    },
    PatternCategory {
        name: "Directives",
        groups: &[
            PatternGroup {
                name: "Built-in",
                patterns: &[
                    "v-text", "v-html", "v-show", "v-if", "v-else", "v-for", "v-on", "v-bind",
                    "v-model",
                ],
            },
            PatternGroup {
                name: "Modifiers",
                patterns: &[".prevent", ".stop", ".capture", ".self", ".once", ".passive"],
            },
            PatternGroup {
                name: "Custom",
                patterns: &[
                    r#"app.directive("focus", {})"#,
                    "v-focus",
                    "directive hooks: mounted, updated",
                ],
            },
        ],
    },
    PatternCategory {
        name: "Router",
        groups: &[
            PatternGroup {
                name: "Navigation",
                patterns: &[
                    r#"this.$router.push("/path")"#,
                    r#"router.push({ name: "Home" })"#,
                    r#"<router-link to="/about">"#,
                ],
            },
            PatternGroup {
                name: "Route Object",
                patterns: &["this.$route.params", "this.$route.query", "this.$route.path"],
            },
            PatternGroup {
                name: "Guards",
                patterns: &[
                    "beforeRouteEnter",
                    "beforeRouteUpdate",
                    "beforeRouteLeave",
                    "router.beforeEach",
                ],
            },
        ],
    },
];

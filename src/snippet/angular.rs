use super::preview::Rewrite;
use super::reference::{PatternCategory, PatternGroup};

pub const STARTER: &str = r#"import { Component } from '@angular/core';

@Component({
  selector: 'app-my-component',
  template: `
    <div class="p-4">
      <h1 class="text-2xl font-bold mb-4">{{ title }}</h1>
      <p class="mb-4">Count: {{ count }}</p>
      <button
        (click)="increment()"
        class="bg-red-500 text-white px-4 py-2 rounded hover:bg-red-600"
      >
        Increment
      </button>
      <ul class="mt-4">
        <li *ngFor="let item of items" class="py-1">
          {{ item }}
        </li>
      </ul>
    </div>
  `,
  styles: [`
    :host {
      display: block;
    }
  `]
})
export class MyComponent {
  title = 'Angular Component';
  count = 0;
  items = ['Item 1', 'Item 2', 'Item 3'];

  increment() {
    this.count++;
  }
}"#;

pub const TEMPLATE_LITERAL: &str = r"template:\s*`([^`]*)`";

pub const REWRITES: &[Rewrite] = &[
    Rewrite {
        pattern: r"\{\{\s*([^}]+)\s*\}\}",
        replacement: r#"<span class="text-blue-600 font-mono">{{ $1 }}</span>"#,
    },
    Rewrite {
        pattern: r#"\*ngFor="[^"]*""#,
        replacement: r#"class="bg-yellow-100 px-2 py-1 rounded""#,
    },
    Rewrite {
        pattern: r#"\*ngIf="[^"]*""#,
        replacement: r#"class="bg-green-100 px-2 py-1 rounded""#,
    },
    Rewrite {
        pattern: r#"\(click\)="[^"]*""#,
        replacement: r#"data-event="click" class="cursor-pointer""#,
    },
];

pub const REFERENCE: &[PatternCategory] = &[
    PatternCategory {
        name: "Components",
        groups: &[
            PatternGroup {
                name: "Component Decorator",
                patterns: &[
                    r#"@Component({ selector: "app-name" })"#,
                    r#"@Component({ templateUrl: "./component.html" })"#,
                    r#"@Component({ styleUrls: ["./component.css"] })"#,
                ],
            },
            PatternGroup {
                name: "Component Class",
                patterns: &["export class MyComponent {}", "constructor() {}", "ngOnInit() {}"],
            },
            PatternGroup {
                name: "Template Syntax",
                patterns: &[
                    "{{ property }}",
                    r#"*ngFor="let item of items""#,
                    r#"*ngIf="condition""#,
                    r#"(click)="method()""#,
                    r#"[property]="value""#,
                ],
            },
        ],
    },
    PatternCategory {
        name: "Directives",
        groups: &[
            PatternGroup {
                name: "Structural",
                patterns: &["*ngFor", "*ngIf", "*ngSwitch", "ng-container", "ng-template"],
            },
            PatternGroup {
                name: "Attribute",
                patterns: &["[ngClass]", "[ngStyle]", "[disabled]", "[hidden]"],
            },
            PatternGroup {
                name: "Custom",
                patterns: &[
                    r#"@Directive({ selector: "[appCustom]" })"#,
                    r#"@HostListener("click")"#,
                    "@Input()",
                    "@Output()",
                ],
            },
        ],
    },
    PatternCategory {
        name: "Services & DI",
        groups: &[
            PatternGroup {
                name: "Service",
                patterns: &[
                    r#"@Injectable({ providedIn: "root" })"#,
                    "constructor(private service: MyService)",
                    "this.service.method()",
                ],
            },
            PatternGroup {
                name: "HTTP Client",
                patterns: &[
                    "this.http.get<T>(url)",
                    "this.http.post<T>(url, data)",
                    "subscribe(response => {})",
                ],
            },
            PatternGroup {
                name: "Dependency Injection",
                patterns: &["providers: [MyService]", "inject(MyService)", "useFactory", "useValue"],
            },
        ],
    },
    PatternCategory {
        name: "Routing",
        groups: &[
            PatternGroup {
                name: "Router",
                patterns: &[
                    r#"this.router.navigate(["/path"])"#,
                    "this.route.params.subscribe()",
                    r#"routerLink="/path""#,
                ],
            },
            PatternGroup {
                name: "Route Config",
                patterns: &[
                    r#"{ path: "home", component: HomeComponent }"#,
                    r#"{ path: "**", redirectTo: "/home" }"#,
                    "canActivate: [AuthGuard]",
                ],
            },
            PatternGroup {
                name: "Route Guards",
                patterns: &["CanActivate", "CanDeactivate", "Resolve", "CanLoad"],
            },
        ],
    },
    PatternCategory {
        name: "Forms",
        groups: &[
            PatternGroup {
                name: "Template-driven",
                patterns: &[
                    r#"[(ngModel)]="property""#,
                    r##"#form="ngForm""##,
                    "form.valid",
                    "ngSubmit",
                ],
            },
            PatternGroup {
                name: "Reactive",
                patterns: &[
                    "FormBuilder",
                    "FormGroup",
                    "FormControl",
                    "Validators.required",
                    "formControlName",
                ],
            },
            PatternGroup {
                name: "Validation",
                patterns: &[
                    r#"form.get("field")?.errors"#,
                    "field.invalid && field.touched",
                    "Validators.email",
                ],
            },
        ],
    },
    PatternCategory {
        name: "Lifecycle Hooks",
        groups: &[
            PatternGroup {
                name: "Common Hooks",
                patterns: &["ngOnInit()", "ngOnDestroy()", "ngOnChanges()", "ngAfterViewInit()"],
            },
            PatternGroup {
                name: "Change Detection",
                patterns: &["OnPush", "ChangeDetectorRef", "markForCheck()", "detectChanges()"],
            },
            PatternGroup {
                name: "View Hooks",
                patterns: &[
                    "ngAfterViewInit()",
                    "ngAfterViewChecked()",
                    "ngAfterContentInit()",
                ],
            },
        ],
    },
    PatternCategory {
        name: "RxJS & Observables",
        groups: &[
            PatternGroup {
                name: "Observables",
                patterns: &["Observable<T>", "subscribe()", "unsubscribe()", "pipe()"],
            },
            PatternGroup {
                name: "Operators",
                patterns: &[
                    "map()",
                    "filter()",
                    "switchMap()",
                    "mergeMap()",
                    "catchError()",
                    "tap()",
                ],
            },
            PatternGroup {
                name: "Subjects",
                patterns: &[
                    "Subject<T>",
                    "BehaviorSubject<T>",
                    "ReplaySubject<T>",
                    "next()",
                    "complete()",
                ],
            },
        ],
    },
];

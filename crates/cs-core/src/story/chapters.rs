//! Chapter content, indexed by ordinal.

use super::{Chapter, StoryChapter};

pub(super) static CHAPTERS: [StoryChapter; 13] = [
    StoryChapter {
        chapter: Chapter::Prologue,
        title: "Through the Cloud Gate",
        introduction: "A mortal may still question the heavens. You stand before the gate of \
            the Azure Cloud Sect, where the elders bind the ten thousand things into containers.",
        concepts: &["Containers", "Pods", "Running workloads"],
        commands: &["kubectl run", "kubectl get pods", "kubectl describe pod"],
        reward_exp: 200,
    },
    StoryChapter {
        chapter: Chapter::Chapter1,
        title: "The Outer Courtyard",
        introduction: "The second senior brother hands you a broom. Before you sweep the \
            courtyard, you must learn to see everything that lives in it, and to clear it away.",
        concepts: &["Pod lifecycle", "Namespaces", "Resource listing"],
        commands: &[
            "kubectl get pods",
            "kubectl delete pod",
            "kubectl get all",
            "kubectl delete all",
        ],
        reward_exp: 250,
    },
    StoryChapter {
        chapter: Chapter::Chapter2,
        title: "The Thousand Clones Formation",
        introduction: "A single disciple falls; a formation endures. The elders teach you to \
            raise many identical guardians and to command their number.",
        concepts: &["Deployments", "ReplicaSets", "Rolling updates"],
        commands: &[
            "kubectl create deployment",
            "kubectl scale",
            "kubectl get deployments",
            "kubectl rollout status",
            "kubectl describe deployment",
            "kubectl delete deployment",
        ],
        reward_exp: 300,
    },
    StoryChapter {
        chapter: Chapter::Chapter3,
        title: "Whispers Between Peaks",
        introduction: "The guardians move from peak to peak, yet messengers must always find \
            them. You learn the art of the stable name.",
        concepts: &["Services", "Endpoints", "Service discovery"],
        commands: &[
            "kubectl expose",
            "kubectl get services",
            "kubectl describe service",
            "kubectl delete service",
            "kubectl get endpoints",
        ],
        reward_exp: 350,
    },
    StoryChapter {
        chapter: Chapter::Chapter4,
        title: "Scrolls of the Library Pavilion",
        introduction: "The third senior sister keeps the scrolls that tell every technique how \
            to behave, and the sealed scrolls that must never be read aloud.",
        concepts: &["ConfigMaps", "Secrets", "Configuration injection"],
        commands: &[
            "kubectl create configmap",
            "kubectl create secret",
            "kubectl get configmaps",
            "kubectl describe configmap",
            "kubectl delete configmap",
            "kubectl get secrets",
        ],
        reward_exp: 400,
    },
    StoryChapter {
        chapter: Chapter::Chapter5,
        title: "The Bottomless Treasury",
        introduction: "Guardians perish and are reborn, but the treasury must remember. You \
            are taught to claim vaults that outlive any single body.",
        concepts: &["PersistentVolumes", "Claims", "StorageClasses"],
        commands: &[
            "kubectl get pv",
            "kubectl get pvc",
            "kubectl apply",
            "kubectl delete pvc",
            "kubectl get storageclasses",
            "kubectl delete pv",
        ],
        reward_exp: 450,
    },
    StoryChapter {
        chapter: Chapter::Chapter6,
        title: "Tending the Spirit Veins",
        introduction: "Each mountain of the sect rests on a spirit vein. You learn to read \
            their strength, mark them, and rest them when they run dry.",
        concepts: &["Nodes", "Scheduling", "Resource usage"],
        commands: &[
            "kubectl get nodes",
            "kubectl describe node",
            "kubectl top",
            "kubectl top node",
            "kubectl label node",
            "kubectl taint node",
            "kubectl untaint node",
            "kubectl cordon node",
            "kubectl uncordon node",
            "kubectl drain node",
        ],
        reward_exp: 500,
    },
    StoryChapter {
        chapter: Chapter::Chapter7,
        title: "The Physician of Broken Formations",
        introduction: "A guardian lies still and no one knows why. The alchemy hall teaches \
            you to listen to its last words and to step inside its mind.",
        concepts: &["Logs", "Exec", "Events", "Debugging"],
        commands: &[
            "kubectl logs",
            "kubectl logs -f",
            "kubectl exec",
            "kubectl port-forward",
            "kubectl events",
            "kubectl get events",
            "kubectl debug",
            "kubectl cp",
        ],
        reward_exp: 550,
    },
    StoryChapter {
        chapter: Chapter::Chapter8,
        title: "Walls Around the Mountain",
        introduction: "The Purgatory Gate probes the sect's defences. You raise walls between \
            the halls and guard the great gate.",
        concepts: &["NetworkPolicies", "Ingress", "Traffic control"],
        commands: &[
            "kubectl get networkpolicies",
            "kubectl describe networkpolicy",
            "kubectl create networkpolicy",
            "kubectl delete networkpolicy",
            "kubectl get ingress",
            "kubectl describe ingress",
            "kubectl delete ingress",
        ],
        reward_exp: 600,
    },
    StoryChapter {
        chapter: Chapter::Chapter9,
        title: "The Sect Master's Map",
        introduction: "The sect master unrolls a map of the whole realm. To lead, you must \
            know where every power dwells and how to reach it.",
        concepts: &["Cluster info", "Kubeconfig", "API resources"],
        commands: &[
            "kubectl cluster-info",
            "kubectl config view",
            "kubectl api-resources",
            "kubectl version",
            "kubectl completion",
            "kubectl plugin list",
        ],
        reward_exp: 650,
    },
    StoryChapter {
        chapter: Chapter::Chapter10,
        title: "Turning Back the River of Time",
        introduction: "A flawed technique spread through the formation overnight. The elders \
            show you how to mend it in place, and how to undo it entirely.",
        concepts: &["Patching", "Image updates", "Rollbacks"],
        commands: &[
            "kubectl patch",
            "kubectl set image",
            "kubectl rollout undo",
            "kubectl rollout history",
            "kubectl replace",
            "kubectl edit",
            "kubectl annotate",
        ],
        reward_exp: 700,
    },
    StoryChapter {
        chapter: Chapter::Chapter11,
        title: "Seals of Authority",
        introduction: "Not every disciple may enter every hall. You learn to grant authority, \
            to bind it, and to ask the heavens what is permitted.",
        concepts: &["RBAC", "ServiceAccounts", "Registry credentials"],
        commands: &[
            "kubectl get roles",
            "kubectl get rolebindings",
            "kubectl get clusterroles",
            "kubectl get clusterrolebindings",
            "kubectl create role",
            "kubectl create rolebinding",
            "kubectl auth can-i",
            "kubectl get serviceaccounts",
            "kubectl describe serviceaccount",
            "kubectl create secret docker-registry",
            "kubectl describe secret",
            "kubectl delete secret",
        ],
        reward_exp: 750,
    },
    StoryChapter {
        chapter: Chapter::Epilogue,
        title: "Ascension",
        introduction: "The tribulation clouds gather. Every technique you have learned will \
            be tested at once before you step beyond the mortal realm.",
        concepts: &["Operations mastery"],
        commands: &[
            "kubectl apply",
            "kubectl rollout undo",
            "kubectl drain node",
            "kubectl auth can-i",
            "kubectl debug",
            "kubectl port-forward",
            "kubectl scale",
            "kubectl get events",
        ],
        reward_exp: 1000,
    },
];
